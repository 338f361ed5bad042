//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Constant per-tick motion, never scaled by wall time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod geometry;
pub mod input;
pub mod opponent;
pub mod state;
pub mod tick;

pub use geometry::{Rect, clamp_paddle_y, overlaps, spin_velocity};
pub use input::{PointerMailbox, paddle_y_for_pointer};
pub use opponent::track_ball;
pub use state::{Ball, GameState, Paddle, PlayArea, Side};
pub use tick::{TickEvents, TickInput, tick};
