//! JSON file store for native builds
//!
//! The value is cached in memory; every write goes straight to disk. I/O
//! failures are logged and otherwise ignored.

use std::path::{Path, PathBuf};

use super::{HighScoreRecord, HighScoreStore};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    cached: u64,
}

impl JsonFileStore {
    /// Open (or lazily create) a store at `path`.
    /// A missing or unreadable file counts as no high score.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = Self::read(&path).unwrap_or(0);
        Self { path, cached }
    }

    fn read(path: &Path) -> Option<u64> {
        let json = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str::<HighScoreRecord>(&json) {
            Ok(record) => {
                log::info!("Loaded high score {} from {}", record.high_score, path.display());
                Some(record.high_score)
            }
            Err(e) => {
                log::warn!("Ignoring corrupt high score file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write(&self) {
        let record = HighScoreRecord {
            high_score: self.cached,
        };
        let result = serde_json::to_string(&record)
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(&self.path, json));
        if let Err(e) = result {
            log::warn!("Failed to save high score to {}: {}", self.path.display(), e);
        }
    }
}

impl HighScoreStore for JsonFileStore {
    fn high_score(&self) -> u64 {
        self.cached
    }

    fn set_high_score(&mut self, score: u64) {
        self.cached = score;
        self.write();
    }

    fn clear_high_score(&mut self) {
        self.cached = 0;
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::info!("High score file removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}
