//! Rendering module
//!
//! The game draws through the `Surface` trait, which only knows four
//! primitives. `CanvasSurface` backs it with a browser 2D canvas;
//! `ShapeBatch` tessellates into vertices.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::ShapeBatch;
pub use vertex::Vertex;

use crate::Color;
use crate::sim::{Ball, GameState, Paddle};

/// A 2D drawing surface. Calls are synchronous and infallible.
pub trait Surface {
    /// Reset a rectangle to the background
    fn clear_area(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);
    /// Stroke a line using the net dash pattern
    fn draw_dashed_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color);
}

/// Draw one frame. Reads the state, never changes it.
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let area = &state.area;

    surface.clear_area(0.0, 0.0, area.width, area.height);
    surface.draw_dashed_line(area.width / 2.0, 0.0, area.width / 2.0, area.height, vertex::colors::NET);
    draw_paddle(surface, &state.player);
    draw_paddle(surface, &state.opponent);
    draw_ball(surface, &state.ball);
}

fn draw_paddle<S: Surface + ?Sized>(surface: &mut S, paddle: &Paddle) {
    surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y, paddle.color);
}

/// Circle inscribed in the ball's bounding box
fn draw_ball<S: Surface + ?Sized>(surface: &mut S, ball: &Ball) {
    let center = ball.center();
    surface.fill_circle(center.x, center.y, ball.size / 2.0, ball.color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(f32, f32, f32, f32),
        Rect(f32, f32, f32, f32, Color),
        Circle(f32, f32, f32, Color),
        Dashed(f32, f32, f32, f32, Color),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<DrawCall>,
    }

    impl Surface for Recorder {
        fn clear_area(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(DrawCall::Clear(x, y, w, h));
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.calls.push(DrawCall::Rect(x, y, w, h, color));
        }

        fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
            self.calls.push(DrawCall::Circle(cx, cy, r, color));
        }

        fn draw_dashed_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
            self.calls.push(DrawCall::Dashed(x1, y1, x2, y2, color));
        }
    }

    #[test]
    fn test_render_draw_order() {
        let state = GameState::new(3);
        let mut recorder = Recorder::default();

        render(&state, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                DrawCall::Clear(0.0, 0.0, 800.0, 600.0),
                DrawCall::Dashed(400.0, 0.0, 400.0, 600.0, Color::WHITE),
                DrawCall::Rect(10.0, 250.0, 15.0, 100.0, Color::PLAYER),
                DrawCall::Rect(775.0, 250.0, 15.0, 100.0, Color::OPPONENT),
                DrawCall::Circle(400.0, 300.0, 8.0, Color::WHITE),
            ]
        );
    }

    #[test]
    fn test_render_is_read_only() {
        let state = GameState::new(3);
        let before = format!("{:?}", state);

        let mut batch = ShapeBatch::new(800.0, 600.0);
        render(&state, &mut batch);
        render(&state, &mut batch);

        assert_eq!(format!("{:?}", state), before);
        assert!(!batch.vertices().is_empty());
    }

    #[test]
    fn test_render_frames_do_not_accumulate() {
        let state = GameState::new(3);
        let mut batch = ShapeBatch::new(800.0, 600.0);

        render(&state, &mut batch);
        let first = batch.vertices().len();
        render(&state, &mut batch);

        assert_eq!(batch.vertices().len(), first);
    }
}
