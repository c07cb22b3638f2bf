//! Player intents
//!
//! Device handlers write intents between ticks; the simulation reads them once
//! at the start of each tick. Last write wins.

use serde::{Deserialize, Serialize};

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Move intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    left: bool,
    right: bool,
}

impl Intents {
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// Input port: set or release one direction
    pub fn set(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Left => self.left = active,
            Direction::Right => self.right = active,
        }
    }

    #[inline]
    pub fn left(&self) -> bool {
        self.left
    }

    #[inline]
    pub fn right(&self) -> bool {
        self.right
    }
}
