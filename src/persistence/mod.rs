//! High score persistence
//!
//! The simulation only sees the [`HighScoreStore`] trait. Backends:
//! - `MemoryStore`: in-process, counts writes
//! - `JsonFileStore`: JSON file on native targets
//! - `LocalStorageStore`: browser LocalStorage on wasm32

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use serde::{Deserialize, Serialize};

/// Storage key shared by the key/value backends
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Get/set/clear of a single best score. A missing value reads as 0.
pub trait HighScoreStore {
    fn high_score(&self) -> u64;
    fn set_high_score(&mut self, score: u64);
    fn clear_high_score(&mut self);
}

/// On-disk record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u64,
}
