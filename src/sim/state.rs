//! Match state and context
//!
//! Everything one match owns lives in [`MatchContext`]. Nothing is shared
//! between matches; a rematch rebuilds every entity.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bounds::Arena;
use super::bricks::BrickField;
use super::paddle::Paddle;
use super::rng::{RandomSource, SeededSource};
use crate::error::SettingsError;
use crate::persistence::HighScoreStore;
use crate::settings::MatchSettings;

/// Where the match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    /// Every brick is gone
    Won,
    /// The ball dropped through the floor
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    /// Banner text for terminal outcomes
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::Won => Some("You Won !"),
            Outcome::Lost => Some("Game Over !"),
        }
    }
}

/// Score bookkeeping for one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub score: u64,
    /// Ticks since the last score point
    pub frames: u32,
    pub high_score: u64,
    pub outcome: Outcome,
    /// Ticks per score point
    pub score_interval: u32,
}

impl MatchState {
    pub fn new(high_score: u64, score_interval: u32) -> Self {
        Self {
            score: 0,
            frames: 0,
            high_score,
            outcome: Outcome::Playing,
            score_interval,
        }
    }

    /// Count one tick of play. Every `score_interval` ticks the score goes up
    /// by one; a score above the high score is written through to the store.
    /// Returns true when the store was written.
    pub fn advance_frame(&mut self, store: &mut dyn HighScoreStore) -> bool {
        self.frames += 1;
        if self.frames < self.score_interval {
            return false;
        }

        self.score += 1;
        self.frames = 0;

        if self.score > self.high_score {
            self.high_score = self.score;
            store.set_high_score(self.high_score);
            log::debug!("New high score: {}", self.high_score);
            return true;
        }
        false
    }
}

/// Read-only snapshot for score/status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatus {
    pub score: u64,
    pub high_score: u64,
    pub outcome: Outcome,
}

impl MatchStatus {
    pub fn score_text(&self) -> String {
        format!("Score : {}", self.score)
    }

    pub fn high_score_text(&self) -> String {
        format!("High Score : {}", self.high_score)
    }

    pub fn outcome_text(&self) -> Option<&'static str> {
        self.outcome.message()
    }
}

/// Everything a single match owns
#[derive(Debug)]
pub struct MatchContext {
    pub settings: MatchSettings,
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickField,
    pub state: MatchState,
    pub rng: Box<dyn RandomSource>,
    /// Ticks of play so far
    pub time_ticks: u64,
}

impl MatchContext {
    /// Build a match seeded from `settings.seed`
    pub fn new(settings: MatchSettings, store: &dyn HighScoreStore) -> Result<Self, SettingsError> {
        let rng = Box::new(SeededSource::new(settings.seed));
        Self::with_random_source(settings, store, rng)
    }

    /// Build a match with a caller-supplied bounce RNG
    pub fn with_random_source(
        settings: MatchSettings,
        store: &dyn HighScoreStore,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;

        let arena = Arena::new(settings.arena_width, settings.arena_height);
        let ball = Ball::new(&arena, settings.ball_size, settings.ball_speed);
        let paddle = Paddle::new(&arena, settings.paddle_size, settings.paddle_speed);
        let bricks = BrickField::generate_layout(
            settings.brick_rows,
            settings.brick_columns,
            arena.width,
            settings.brick_color,
        );
        let state = MatchState::new(store.high_score(), settings.score_interval);

        log::info!(
            "New match: {}x{} arena, {} bricks, high score {}",
            arena.width,
            arena.height,
            bricks.len(),
            state.high_score
        );

        Ok(Self {
            settings,
            arena,
            ball,
            paddle,
            bricks,
            state,
            rng,
            time_ticks: 0,
        })
    }

    /// Start over with fresh entities; the bounce RNG keeps running
    pub fn restart(&mut self, store: &dyn HighScoreStore) {
        self.ball = Ball::new(&self.arena, self.settings.ball_size, self.settings.ball_speed);
        self.paddle = Paddle::new(
            &self.arena,
            self.settings.paddle_size,
            self.settings.paddle_speed,
        );
        self.bricks = BrickField::generate_layout(
            self.settings.brick_rows,
            self.settings.brick_columns,
            self.arena.width,
            self.settings.brick_color,
        );
        self.state = MatchState::new(store.high_score(), self.settings.score_interval);
        self.time_ticks = 0;
        log::info!("Match restarted");
    }

    /// Forget the stored high score
    pub fn reset_high_score(&mut self, store: &mut dyn HighScoreStore) {
        store.clear_high_score();
        self.state.high_score = 0;
        log::info!("High score reset");
    }

    /// Terminal outcome implied by the current entities, if any.
    /// Falling through the floor is checked first.
    pub fn evaluate_outcome(&self) -> Outcome {
        if self.ball.is_below(self.arena.height) {
            Outcome::Lost
        } else if self.bricks.is_empty() {
            Outcome::Won
        } else {
            Outcome::Playing
        }
    }

    pub fn status(&self) -> MatchStatus {
        MatchStatus {
            score: self.state.score,
            high_score: self.state.high_score,
            outcome: self.state.outcome,
        }
    }
}
