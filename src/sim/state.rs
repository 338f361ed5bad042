//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in a single `GameState`; there is
//! no module-level state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, clamp_paddle_y};
use crate::Color;
use crate::consts::*;
use crate::settings::Settings;

/// One of the two sides of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle on the left
    Player,
    /// Scripted paddle on the right
    Opponent,
}

/// Fixed bounds shared by all clamping and collision logic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: AREA_WIDTH,
            height: AREA_HEIGHT,
        }
    }
}

impl PlayArea {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle. Has no velocity: the player's follows the pointer, the
/// opponent's is moved by the policy each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Paddle {
    /// Create a paddle at `x`, vertically centered in the area
    pub fn centered(x: f32, size: Vec2, area: &PlayArea, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, area.height / 2.0 - size.y / 2.0),
            size,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Set the top edge, clamped to keep the paddle inside the area
    pub fn set_y(&mut self, y: f32, area: &PlayArea) {
        self.pos.y = clamp_paddle_y(y, self.size.y, area.height);
    }
}

/// The ball. Collides as a square bounding box, drawn as the inscribed circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Re-center the ball and give it a fresh direction
    ///
    /// Both velocity components get magnitude `speed`; each sign is drawn
    /// independently.
    pub fn serve(&mut self, area: &PlayArea, speed: f32, rng: &mut Pcg32) {
        self.pos = area.center() - Vec2::splat(self.size / 2.0);
        let mut sign = || if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(speed * sign(), speed * sign());
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub area: PlayArea,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    /// Opponent movement per tick
    pub paddle_speed: f32,
    /// Ball speed on serve, and the spin scale on paddle hits
    pub ball_speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the default table and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings::default(), seed)
    }

    /// Create a new game from (already validated) settings
    pub fn with_settings(settings: &Settings, seed: u64) -> Self {
        let area = PlayArea {
            width: settings.area_width,
            height: settings.area_height,
        };
        let paddle_size = Vec2::new(settings.paddle_width, settings.paddle_height);

        let player = Paddle::centered(settings.paddle_margin, paddle_size, &area, settings.player_color);
        let opponent = Paddle::centered(
            area.width - settings.paddle_width - settings.paddle_margin,
            paddle_size,
            &area,
            settings.opponent_color,
        );

        let mut state = Self {
            seed,
            area,
            player,
            opponent,
            ball: Ball::new(settings.ball_size, settings.ball_color),
            paddle_speed: settings.paddle_speed,
            ball_speed: settings.ball_speed,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_ball();
        state
    }

    /// Put the ball back in the center with a freshly randomized direction
    pub fn reset_ball(&mut self) {
        self.ball.serve(&self.area, self.ball_speed, &mut self.rng);
    }
}
