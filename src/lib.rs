//! Brickfall - A single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, collisions, match state)
//! - `renderer`: Drawing capability consumed by the simulation
//! - `platform`: Device event to intent mapping
//! - `persistence`: High score storage backends
//! - `settings`: Data-driven match configuration

pub mod error;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use persistence::{HighScoreStore, MemoryStore};
pub use settings::MatchSettings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED: f32 = 3.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: f32 = 70.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Distance between the paddle's top edge and the arena bottom
    pub const PADDLE_BOTTOM_GAP: f32 = 10.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 4;
    pub const BRICK_COLUMNS: u32 = 7;
    /// Upper bound on rows x columns accepted from settings
    pub const MAX_BRICKS: u32 = 10_000;
    /// Offset of the first brick from the arena origin
    pub const BRICK_ORIGIN_X: f32 = 5.0;
    pub const BRICK_ORIGIN_Y: f32 = 10.0;

    /// Score goes up by one every this many ticks of play
    pub const SCORE_INTERVAL_TICKS: u32 = 6;

    /// Extra speed applied on every paddle bounce
    pub const PADDLE_KICK: f32 = 1.0;
    /// Horizontal nudge added when a move intent is held during a bounce
    pub const INTENT_BIAS: f32 = 1.0;
    /// Width of the random spread for middle-zone bounces
    pub const CENTER_SPREAD: f32 = 1.5;

    /// Outcome banner
    pub const BANNER_FONT_SIZE: f32 = 50.0;
}
