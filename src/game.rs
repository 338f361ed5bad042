//! Loop driver
//!
//! One `Game::frame` per display refresh: consume the latest pointer
//! position, advance the simulation one tick, then draw. The host owns the
//! scheduling and calls back in.

use serde::Serialize;

use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::{GameState, PointerMailbox, Side, TickEvents, TickInput, tick};

/// Points won by each side this session. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub player: u32,
    pub opponent: u32,
}

impl Scoreboard {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub scoreboard: Scoreboard,
    pointer: PointerMailbox,
}

impl Game {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            state: GameState::with_settings(settings, seed),
            scoreboard: Scoreboard::default(),
            pointer: PointerMailbox::new(),
        }
    }

    /// Record a pointer move (play-area coordinates). Can be called any
    /// number of times per frame; the last call wins.
    pub fn pointer_moved(&mut self, y: f32) {
        self.pointer.post(y);
    }

    /// Run one tick and draw the result
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> TickEvents {
        let events = self.update();
        render(&self.state, surface);
        events
    }

    /// Advance the simulation without drawing
    pub fn update(&mut self) -> TickEvents {
        let input = TickInput {
            pointer_y: self.pointer.take(),
        };
        let events = tick(&mut self.state, &input);

        if let Some(side) = events.scored {
            self.scoreboard.award(side);
            log::debug!(
                "{:?} scored at tick {} ({} - {})",
                side,
                self.state.time_ticks,
                self.scoreboard.player,
                self.scoreboard.opponent
            );
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ShapeBatch;
    use glam::Vec2;

    #[test]
    fn test_last_pointer_before_frame_wins() {
        let mut game = Game::new(&Settings::default(), 5);
        let mut batch = ShapeBatch::new(800.0, 600.0);

        game.pointer_moved(100.0);
        game.pointer_moved(500.0);
        game.pointer_moved(320.0);
        game.frame(&mut batch);

        assert_eq!(game.state.player.pos.y, 270.0);
    }

    #[test]
    fn test_scoreboard_counts_points() {
        let mut game = Game::new(&Settings::default(), 5);
        game.state.ball.pos = Vec2::new(2.0, 100.0);
        game.state.ball.vel = Vec2::new(-6.0, 6.0);

        let events = game.update();

        assert_eq!(events.scored, Some(Side::Opponent));
        assert_eq!(game.scoreboard, Scoreboard { player: 0, opponent: 1 });
    }

    #[test]
    fn test_long_session_keeps_invariants() {
        let mut game = Game::new(&Settings::default(), 2024);
        let mut batch = ShapeBatch::new(800.0, 600.0);

        for i in 0..5_000u32 {
            if i % 3 == 0 {
                game.pointer_moved((i % 700) as f32 - 50.0);
            }
            game.frame(&mut batch);

            let max = game.state.area.height - game.state.player.size.y;
            assert!((0.0..=max).contains(&game.state.player.pos.y));
            assert!((0.0..=max).contains(&game.state.opponent.pos.y));
        }

        // Someone must have scored in 5000 ticks
        assert!(game.scoreboard.player + game.scoreboard.opponent > 0);
    }

    #[test]
    fn test_custom_settings() {
        let settings = Settings::from_json(r#"{"area_width": 400, "area_height": 300, "ball_speed": 4}"#).unwrap();
        let game = Game::new(&settings, 1);

        assert_eq!(game.state.ball.pos, Vec2::new(192.0, 142.0));
        assert_eq!(game.state.ball.vel.x.abs(), 4.0);
        assert_eq!(game.state.opponent.pos.x, 400.0 - 15.0 - 10.0);
        assert_eq!(game.state.player.pos.y, 100.0);
    }
}
