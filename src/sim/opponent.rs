//! Scripted opponent
//!
//! Proportional tracking, no prediction: each tick the paddle steps a fixed
//! distance toward the ball's height. It does not stop exactly on target, so
//! it can jitter by up to one step around it.

use super::state::{Ball, Paddle, PlayArea};

/// Move the opponent paddle one tick toward the ball
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, area: &PlayArea, speed: f32) {
    let target = ball.center().y - paddle.size.y / 2.0;

    let y = if paddle.pos.y < target {
        paddle.pos.y + speed
    } else if paddle.pos.y > target {
        paddle.pos.y - speed
    } else {
        paddle.pos.y
    };

    paddle.set_y(y, area);
}
