//! Pointer input for the player paddle
//!
//! Pointer events can arrive many times between ticks. Only the most recent
//! position matters, so the host posts into a single-slot mailbox and the
//! simulation takes from it once per tick.

use super::geometry::clamp_paddle_y;

/// Paddle top edge for a pointer at `pointer_y` (play-area coordinates)
///
/// Centers the paddle on the pointer, then clamps it into the area. Returns
/// `None` for non-finite pointer values, which some hosts report while the
/// pointer is outside the canvas.
pub fn paddle_y_for_pointer(pointer_y: f32, paddle_height: f32, area_height: f32) -> Option<f32> {
    if !pointer_y.is_finite() {
        return None;
    }
    Some(clamp_paddle_y(pointer_y - paddle_height / 2.0, paddle_height, area_height))
}

/// Latest pointer position posted by the host, not yet consumed
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerMailbox {
    latest: Option<f32>,
}

impl PointerMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position, replacing any unconsumed one
    pub fn post(&mut self, pointer_y: f32) {
        self.latest = Some(pointer_y);
    }

    /// Consume the latest position, if one arrived since the last take
    pub fn take(&mut self) -> Option<f32> {
        self.latest.take()
    }

    pub fn peek(&self) -> Option<f32> {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pointer_centers_paddle() {
        assert_eq!(paddle_y_for_pointer(300.0, 100.0, 600.0), Some(250.0));
    }

    #[test]
    fn test_pointer_out_of_range_clamps() {
        assert_eq!(paddle_y_for_pointer(-500.0, 100.0, 600.0), Some(0.0));
        assert_eq!(paddle_y_for_pointer(20.0, 100.0, 600.0), Some(0.0));
        assert_eq!(paddle_y_for_pointer(590.0, 100.0, 600.0), Some(500.0));
        assert_eq!(paddle_y_for_pointer(f32::INFINITY, 100.0, 600.0), None);
        assert_eq!(paddle_y_for_pointer(f32::NAN, 100.0, 600.0), None);
    }

    #[test]
    fn test_mailbox_last_value_wins() {
        let mut mailbox = PointerMailbox::new();
        assert_eq!(mailbox.take(), None);

        mailbox.post(10.0);
        mailbox.post(20.0);
        mailbox.post(30.0);
        assert_eq!(mailbox.peek(), Some(30.0));
        assert_eq!(mailbox.take(), Some(30.0));

        // Consumed
        assert_eq!(mailbox.take(), None);
    }

    proptest! {
        #[test]
        fn prop_pointer_keeps_paddle_in_area(pointer_y in -10_000.0f32..10_000.0) {
            let y = paddle_y_for_pointer(pointer_y, 100.0, 600.0).unwrap();
            prop_assert!((0.0..=500.0).contains(&y));
        }
    }
}
