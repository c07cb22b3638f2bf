//! Per-frame simulation step
//!
//! Core game loop that advances a match by one tick. The caller (a tick
//! driver) keeps calling [`tick`] until it returns a terminal outcome.

use glam::Vec2;

use super::collision::resolve_paddle_collision;
use super::input::Intents;
use super::state::{MatchContext, Outcome};
use crate::persistence::HighScoreStore;
use crate::renderer::{Color, Renderer, TextStyle};

/// Advance the match by one tick and draw the resulting frame.
///
/// Order matters: bricks are tested against the ball before it moves, the
/// paddle is tested after it moves, and the paddle itself moves last.
pub fn tick(
    ctx: &mut MatchContext,
    intents: &Intents,
    renderer: &mut dyn Renderer,
    store: &mut dyn HighScoreStore,
) -> Outcome {
    // Terminal states are sticky; only the banner is redrawn
    if !ctx.state.outcome.is_terminal() {
        let outcome = ctx.evaluate_outcome();
        if outcome.is_terminal() {
            log::info!(
                "Match over: {:?} after {} ticks, score {}",
                outcome,
                ctx.time_ticks,
                ctx.state.score
            );
            ctx.state.outcome = outcome;
        }
    }
    if let Some(text) = ctx.state.outcome.message() {
        draw_banner(ctx, text, renderer);
        return ctx.state.outcome;
    }

    ctx.time_ticks += 1;
    ctx.state.advance_frame(store);

    renderer.clear(ctx.arena.bounds());

    ctx.bricks.render(renderer);
    ctx.bricks.resolve_collisions(&mut ctx.ball);

    ctx.ball.reflect_off_walls(ctx.arena.width);
    ctx.ball.integrate();
    resolve_paddle_collision(&mut ctx.ball, &ctx.paddle, intents, ctx.rng.as_mut());
    renderer.draw_circle(ctx.ball.draw_center(), ctx.ball.size, Color::WHITE);

    if intents.left() {
        ctx.paddle.move_left();
    }
    if intents.right() {
        ctx.paddle.move_right();
    }
    ctx.paddle.clamp(ctx.arena.width);
    renderer.draw_rect(ctx.paddle.rect(), Color::WHITE);

    Outcome::Playing
}

fn draw_banner(ctx: &MatchContext, text: &str, renderer: &mut dyn Renderer) {
    let at = Vec2::new(ctx.arena.width / 2.0, ctx.arena.height / 2.0);
    renderer.draw_text(text, at, &TextStyle::banner());
}
