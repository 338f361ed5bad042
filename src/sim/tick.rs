//! Per-frame simulation tick
//!
//! Motion uses constant per-tick deltas; a tick is one display refresh, not a
//! fixed slice of wall time.

use super::geometry::{overlaps, spin_velocity};
use super::input::paddle_y_for_pointer;
use super::opponent::track_ball;
use super::state::{GameState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer height (play-area coordinates), if it moved since the last tick
    pub pointer_y: Option<f32>,
}

/// What happened during a tick, for the host (score, logging)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Ball touched the top or bottom wall
    pub wall_bounce: bool,
    /// Paddle the ball bounced off, if any
    pub paddle_hit: Option<Side>,
    /// Side that won a point (the ball left the area on the other side)
    pub scored: Option<Side>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();
    state.time_ticks += 1;

    if let Some(y) = input
        .pointer_y
        .and_then(|p| paddle_y_for_pointer(p, state.player.size.y, state.area.height))
    {
        state.player.pos.y = y;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Top/bottom walls. Only the velocity flips; the ball may sit past the
    // wall for this frame.
    if ball.rect().top() <= 0.0 || ball.rect().bottom() >= state.area.height {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }

    // Player first; at most one paddle resolves per tick
    let player = &state.player;
    let opponent = &state.opponent;
    if overlaps(&player.rect(), &ball.rect()) {
        ball.pos.x = player.rect().right();
        ball.vel.x = ball.vel.x.abs();
        ball.vel.y = spin_velocity(ball.center().y, player.center_y(), player.size.y, state.ball_speed);
        events.paddle_hit = Some(Side::Player);
    } else if overlaps(&opponent.rect(), &ball.rect()) {
        ball.pos.x = opponent.rect().left() - ball.size;
        ball.vel.x = -ball.vel.x.abs();
        ball.vel.y = spin_velocity(ball.center().y, opponent.center_y(), opponent.size.y, state.ball_speed);
        events.paddle_hit = Some(Side::Opponent);
    }

    if let Some(side) = events.paddle_hit {
        log::trace!("{:?} paddle hit, ball vel now {}", side, state.ball.vel);
    }

    // Out the left edge is the opponent's point, out the right the player's
    let ball_rect = state.ball.rect();
    if ball_rect.left() < 0.0 {
        events.scored = Some(Side::Opponent);
    } else if ball_rect.right() > state.area.width {
        events.scored = Some(Side::Player);
    }
    if events.scored.is_some() {
        state.reset_ball();
    }

    track_ball(&mut state.opponent, &state.ball, &state.area, state.paddle_speed);

    events
}
