//! In-memory store

use super::HighScoreStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
    writes: usize,
    clears: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(score: u64) -> Self {
        Self {
            value: Some(score),
            ..Self::default()
        }
    }

    /// Number of `set_high_score` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Number of `clear_high_score` calls so far
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl HighScoreStore for MemoryStore {
    fn high_score(&self) -> u64 {
        self.value.unwrap_or(0)
    }

    fn set_high_score(&mut self, score: u64) {
        self.value = Some(score);
        self.writes += 1;
    }

    fn clear_high_score(&mut self) {
        self.value = None;
        self.clears += 1;
    }
}
