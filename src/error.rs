//! Error types
//!
//! The simulation itself cannot fail: winning and losing are outcomes, not
//! errors. The only fallible step is building a match from settings.

use thiserror::Error;

/// Rejected match settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A length or speed that must be strictly positive and finite
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    /// A count that must be at least one
    #[error("{name} must be at least 1")]
    ZeroCount { name: &'static str },

    /// The grid has more bricks than a match supports
    #[error("{rows} x {columns} bricks exceeds the limit of {max}")]
    TooManyBricks { rows: u32, columns: u32, max: u32 },

    /// The paddle would not fit between the side walls
    #[error("paddle size {paddle} does not fit in arena width {arena}")]
    PaddleTooWide { paddle: f32, arena: f32 },

    /// Settings JSON could not be parsed
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}
