//! Match settings
//!
//! Every tunable of a match lives here. Defaults reproduce the classic
//! 400x400 board; anything else can be loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::renderer::Color;

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_size: f32,
    pub paddle_speed: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_color: Color,

    // === Scoring ===
    /// Ticks of play per score point
    pub score_interval: u32,

    /// Seed for the middle-zone bounce RNG
    pub seed: u64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            paddle_size: PADDLE_SIZE,
            paddle_speed: PADDLE_SPEED,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_color: Color::GRAY,

            score_interval: SCORE_INTERVAL_TICKS,

            seed: 0,
        }
    }
}

impl MatchSettings {
    /// Check that the settings describe a playable match
    pub fn validate(&self) -> Result<(), SettingsError> {
        let lengths = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("paddle_size", self.paddle_size),
            ("paddle_speed", self.paddle_speed),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::NotPositive { name, value });
            }
        }

        let counts = [
            ("brick_rows", self.brick_rows),
            ("brick_columns", self.brick_columns),
            ("score_interval", self.score_interval),
        ];
        for (name, count) in counts {
            if count == 0 {
                return Err(SettingsError::ZeroCount { name });
            }
        }

        match self.brick_rows.checked_mul(self.brick_columns) {
            Some(total) if total <= MAX_BRICKS => {}
            _ => {
                return Err(SettingsError::TooManyBricks {
                    rows: self.brick_rows,
                    columns: self.brick_columns,
                    max: MAX_BRICKS,
                });
            }
        }

        if self.paddle_size > self.arena_width {
            return Err(SettingsError::PaddleTooWide {
                paddle: self.paddle_size,
                arena: self.arena_width,
            });
        }

        Ok(())
    }

    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = MatchSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.brick_rows * settings.brick_columns, 28);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let settings = MatchSettings {
            brick_rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroCount { name: "brick_rows" })
        ));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let settings = MatchSettings {
            brick_rows: 100_000,
            brick_columns: 100_000,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::TooManyBricks { max: MAX_BRICKS, .. })
        ));

        let settings = MatchSettings {
            brick_rows: 100,
            brick_columns: 100,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let settings = MatchSettings {
            ball_size: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotPositive { name: "ball_size", .. })
        ));

        let settings = MatchSettings {
            arena_width: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_paddle_wider_than_arena_rejected() {
        let settings = MatchSettings {
            paddle_size: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = MatchSettings::from_json(r#"{"brick_rows": 2, "seed": 42}"#).unwrap();
        assert_eq!(settings.brick_rows, 2);
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.brick_color, Color::GRAY);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            MatchSettings::from_json("{not json"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            MatchSettings::from_json(r#"{"ball_speed": -1.0}"#),
            Err(SettingsError::NotPositive { name: "ball_speed", .. })
        ));
    }
}
