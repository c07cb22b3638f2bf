//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-count based; one call to `tick` is one step
//! - Injected RNG only
//! - No platform dependencies; drawing goes through the `Renderer` trait

pub mod ball;
pub mod bounds;
pub mod bricks;
pub mod collision;
pub mod input;
pub mod paddle;
pub mod rng;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bounds::{Arena, Rect, spans_overlap};
pub use bricks::{Brick, BrickField};
pub use collision::{
    PaddleHit, PaddleZone, ball_paddle_contact, paddle_zone, resolve_paddle_collision,
};
pub use input::{Direction, Intents};
pub use paddle::Paddle;
pub use rng::{FixedSource, RandomSource, SeededSource};
pub use state::{MatchContext, MatchState, MatchStatus, Outcome};
pub use tick::tick;
