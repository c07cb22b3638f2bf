//! Browser LocalStorage store (wasm32 only)
//!
//! Stores the score as a plain decimal string under [`HIGH_SCORE_KEY`].

use super::{HIGH_SCORE_KEY, HighScoreStore};

#[derive(Debug, Default)]
pub struct LocalStorageStore {
    cached: u64,
}

impl LocalStorageStore {
    /// Load the current value from LocalStorage
    pub fn load() -> Self {
        let cached = Self::storage()
            .and_then(|s| s.get_item(HIGH_SCORE_KEY).ok().flatten())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);
        log::info!("Loaded high score {}", cached);
        Self { cached }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl HighScoreStore for LocalStorageStore {
    fn high_score(&self) -> u64 {
        self.cached
    }

    fn set_high_score(&mut self, score: u64) {
        self.cached = score;
        if let Some(storage) = Self::storage() {
            if storage.set_item(HIGH_SCORE_KEY, &score.to_string()).is_err() {
                log::warn!("Failed to save high score");
            }
        }
    }

    fn clear_high_score(&mut self) {
        self.cached = 0;
        if let Some(storage) = Self::storage() {
            match storage.remove_item(HIGH_SCORE_KEY) {
                Ok(()) => log::info!("High score cleared"),
                Err(e) => log::warn!("Failed to clear high score: {:?}", e),
            }
        }
    }
}
