//! Canvas Pong - classic two-paddle Pong on a 2D drawing surface
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball/paddle physics, collisions, opponent)
//! - `renderer`: Draw calls against an abstract `Surface`
//! - `game`: Loop driver tying input, simulation and rendering together
//! - `settings`: Tunable game parameters

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, Scoreboard};
pub use settings::{Settings, SettingsError};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const AREA_WIDTH: f32 = 800.0;
    pub const AREA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between each paddle and its side of the play area
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Opponent movement per tick
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    /// Per-axis ball speed on serve, and the spin scale on paddle hits
    pub const BALL_SPEED: f32 = 6.0;

    /// Center net dash pattern (dash, gap)
    pub const NET_DASH: [f32; 2] = [8.0, 16.0];
}

/// An opaque RGB color, serialized as a CSS hex string (`#rrggbb`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const PLAYER: Color = Color::rgb(0x09, 0xd3, 0xac);
    pub const OPPONENT: Color = Color::rgb(0xff, 0x52, 0x52);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let channel = |i: usize, len: usize| -> Option<u8> {
            u8::from_str_radix(hex.get(i..i + len)?, 16).ok()
        };
        match hex.len() {
            3 => {
                let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            _ => None,
        }
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Normalized RGBA for vertex colors
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl TryFrom<String> for Color {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or(SettingsError::InvalidColor(value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#09d3ac"), Some(Color::PLAYER));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("ff5252"), None);
        assert_eq!(Color::from_hex("#ff52"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::OPPONENT.to_css(), "#ff5252");
    }

    #[test]
    fn test_color_rgba() {
        let rgba = Color::WHITE.to_rgba();
        assert_eq!(rgba, [1.0, 1.0, 1.0, 1.0]);
    }
}
