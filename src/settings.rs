//! Game settings
//!
//! Table geometry, speeds and colors. Read from LocalStorage on the web and
//! from a JSON file on native; anything missing falls back to the classic
//! 800x600 table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Color;
use crate::consts::*;

/// Errors from parsing or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{what} does not fit in a {area_width}x{area_height} play area")]
    DoesNotFit {
        what: &'static str,
        area_width: f32,
        area_height: f32,
    },

    #[cfg(not(target_arch = "wasm32"))]
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Table ===
    pub area_width: f32,
    pub area_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,
    /// Opponent movement per tick
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Per-axis ball speed on serve
    pub ball_speed: f32,

    /// Fixed RNG seed (random per session when unset)
    pub seed: Option<u64>,

    // === Colors ===
    pub player_color: Color,
    pub opponent_color: Color,
    pub ball_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            area_width: AREA_WIDTH,
            area_height: AREA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            seed: None,

            player_color: Color::PLAYER,
            opponent_color: Color::OPPONENT,
            ball_color: Color::WHITE,
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every entity fits on the table
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("area_width", self.area_width),
            ("area_height", self.area_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            // Written so NaN fails too
            if !(value > 0.0 && value.is_finite()) {
                return Err(SettingsError::NotPositive { field, value });
            }
        }
        if !(self.paddle_margin >= 0.0 && self.paddle_margin.is_finite()) {
            return Err(SettingsError::NotPositive {
                field: "paddle_margin",
                value: self.paddle_margin,
            });
        }

        let does_not_fit = |what: &'static str| SettingsError::DoesNotFit {
            what,
            area_width: self.area_width,
            area_height: self.area_height,
        };
        if self.paddle_height > self.area_height {
            return Err(does_not_fit("paddle"));
        }
        // Both paddles plus room for the ball between them
        if 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size >= self.area_width {
            return Err(does_not_fit("paddle row"));
        }
        if self.ball_size >= self.area_height {
            return Err(does_not_fit("ball"));
        }

        Ok(())
    }

    /// Use `json` when present and valid, otherwise defaults
    fn from_json_or_default(json: Option<&str>, source: &str) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings from {}", source);
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring settings from {}: {}", source, e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Environment variable naming a settings file (native only)
    #[allow(dead_code)]
    const PATH_ENV: &'static str = "CANVAS_PONG_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        Self::from_json_or_default(json.as_deref(), "LocalStorage")
    }

    /// Load settings from the file named by `CANVAS_PONG_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            return Self::from_json_or_default(None, "");
        };

        match Self::read_file(&path) {
            Ok(json) => Self::from_json_or_default(Some(&json), &path),
            Err(e) => {
                log::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read_file(path: &str) -> Result<String, SettingsError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
