//! Collision detection and response for axis-aligned boxes
//!
//! Everything in the play area is a box: paddles, the ball's bounding box,
//! and the area itself. These helpers are pure and allocation free.

use glam::Vec2;

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Check whether two boxes intersect
///
/// Uses strict comparisons on every edge, so boxes that only share an edge
/// do not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Vertical velocity after a paddle hit ("spin")
///
/// Scales `speed` by how far the ball center sits from the paddle center,
/// normalized by half the paddle height. A dead-center hit returns 0, a hit on
/// the paddle's edge returns `±speed`.
#[inline]
pub fn spin_velocity(ball_center_y: f32, paddle_center_y: f32, paddle_height: f32, speed: f32) -> f32 {
    let impact = ball_center_y - paddle_center_y;
    speed * (impact / (paddle_height / 2.0))
}

/// Clamp a paddle's top edge so the paddle stays inside `[0, area_height]`
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, area_height: f32) -> f32 {
    y.max(0.0).min((area_height - paddle_height).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_rect_edges() {
        let r = rect(10.0, 20.0, 15.0, 100.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 25.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(r.center(), Vec2::new(17.5, 70.0));
    }

    #[test]
    fn test_overlaps() {
        let paddle = rect(10.0, 250.0, 15.0, 100.0);

        assert!(overlaps(&paddle, &rect(20.0, 300.0, 16.0, 16.0)));
        assert!(overlaps(&rect(20.0, 300.0, 16.0, 16.0), &paddle));
        assert!(!overlaps(&paddle, &rect(100.0, 300.0, 16.0, 16.0)));
        assert!(!overlaps(&paddle, &rect(20.0, 400.0, 16.0, 16.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let paddle = rect(10.0, 250.0, 15.0, 100.0);

        // Ball's left edge exactly on the paddle's right edge
        assert!(!overlaps(&paddle, &rect(25.0, 300.0, 16.0, 16.0)));
        // Ball's bottom edge exactly on the paddle's top edge
        assert!(!overlaps(&paddle, &rect(12.0, 234.0, 16.0, 16.0)));
    }

    #[test]
    fn test_spin_velocity() {
        assert_eq!(spin_velocity(300.0, 300.0, 100.0, 6.0), 0.0);
        assert_eq!(spin_velocity(350.0, 300.0, 100.0, 6.0), 6.0);
        assert_eq!(spin_velocity(250.0, 300.0, 100.0, 6.0), -6.0);
        assert_eq!(spin_velocity(325.0, 300.0, 100.0, 6.0), 3.0);
    }

    #[test]
    fn test_clamp_paddle_y() {
        assert_eq!(clamp_paddle_y(-40.0, 100.0, 600.0), 0.0);
        assert_eq!(clamp_paddle_y(250.0, 100.0, 600.0), 250.0);
        assert_eq!(clamp_paddle_y(900.0, 100.0, 600.0), 500.0);
    }
}
