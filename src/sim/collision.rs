//! Ball/paddle contact and bounce response
//!
//! The contact box is deliberately lopsided: the ball reaches the paddle's
//! left edge with `x + size` but its right edge with `x - size`. Zones are
//! chosen from the ball's reference x (`pos.x`), not the drawn centre.

use super::ball::Ball;
use super::bounds::spans_overlap;
use super::input::Intents;
use super::paddle::Paddle;
use super::rng::RandomSource;
use crate::consts::{CENTER_SPREAD, INTENT_BIAS, PADDLE_KICK};

/// Which third of the paddle the ball landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleZone {
    Left,
    Middle,
    Right,
}

/// Result of a ball/paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    pub zone: PaddleZone,
    /// Horizontal velocity before the intent bias was applied
    pub base_x_vel: f32,
}

/// Whether the ball currently touches the paddle
pub fn ball_paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    let ball_bottom = ball.pos.y + ball.size;
    ball_bottom >= paddle.top()
        && spans_overlap(
            ball.pos.x - ball.size,
            ball.pos.x + ball.size,
            paddle.left(),
            paddle.right(),
        )
}

/// Zone for a given reference x on the paddle
pub fn paddle_zone(x: f32, paddle: &Paddle) -> PaddleZone {
    let third = paddle.size / 3.0;
    let left_third = paddle.left() + third;
    let right_third = paddle.left() + 2.0 * third;

    if x < left_third {
        PaddleZone::Left
    } else if x > right_third {
        PaddleZone::Right
    } else {
        PaddleZone::Middle
    }
}

/// Bounce the ball off the paddle if they touch.
///
/// Outer thirds kick the ball sideways at `speed + 1`; the middle third picks
/// a random horizontal velocity in `[-0.75, 0.75)`. A held move intent then
/// nudges the result by one unit in that direction; left wins when both are
/// held. Vertical velocity is
/// always reset to `-(speed + 1)`, so bounce magnitude never compounds.
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    intents: &Intents,
    rng: &mut dyn RandomSource,
) -> Option<PaddleHit> {
    if !ball_paddle_contact(ball, paddle) {
        return None;
    }

    let kick = ball.speed + PADDLE_KICK;
    let zone = paddle_zone(ball.pos.x, paddle);
    ball.vel.x = match zone {
        PaddleZone::Left => -kick,
        PaddleZone::Right => kick,
        PaddleZone::Middle => (rng.next_unit() - 0.5) * CENTER_SPREAD,
    };
    let base_x_vel = ball.vel.x;

    if intents.left() {
        ball.vel.x -= INTENT_BIAS;
    } else if intents.right() {
        ball.vel.x += INTENT_BIAS;
    }

    ball.vel.y = -kick;

    log::debug!(
        "Paddle hit in {:?} zone, vel=({:.2}, {:.2})",
        zone,
        ball.vel.x,
        ball.vel.y
    );

    Some(PaddleHit { zone, base_x_vel })
}
