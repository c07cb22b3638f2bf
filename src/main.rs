//! Brickfall entry point
//!
//! Native tick driver: plays one match headless with a ball-tracking
//! autopilot, then prints the final frame and the score lines.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use brickfall::persistence::JsonFileStore;
    use brickfall::renderer::AsciiCanvas;
    use brickfall::sim::{Intents, MatchContext, Outcome, tick};
    use brickfall::{MatchSettings, SettingsError};
    use clap::Parser;
    use glam::Vec2;

    /// Play one autopiloted brickfall match in the terminal
    #[derive(Debug, Parser)]
    #[command(name = "brickfall", version, about)]
    pub struct Args {
        /// JSON settings file; defaults to the classic 400x400 board
        pub settings: Option<PathBuf>,

        /// Stop after this many ticks if the match is still running
        #[arg(long, default_value_t = 100_000)]
        pub max_ticks: u64,

        /// Where the high score is kept
        #[arg(long, default_value = "brickfall_highscore.json")]
        pub save_file: PathBuf,

        /// Override the bounce RNG seed from the settings
        #[arg(long)]
        pub seed: Option<u64>,

        /// Clear the stored high score before playing
        #[arg(long)]
        pub reset_high_score: bool,

        /// Terminal frame width in characters
        #[arg(long, default_value_t = 60)]
        pub cols: usize,

        /// Terminal frame height in characters
        #[arg(long, default_value_t = 30)]
        pub rows: usize,
    }

    /// Steer the paddle under the ball's reference point
    fn autopilot(ctx: &MatchContext) -> Intents {
        let target = ctx.ball.pos.x;
        let center = ctx.paddle.pos.x + ctx.paddle.size / 2.0;
        let deadzone = ctx.paddle.speed;
        Intents::new(center > target + deadzone, center < target - deadzone)
    }

    pub fn run(args: Args) -> Result<(), SettingsError> {
        let mut settings = match &args.settings {
            Some(path) => MatchSettings::load(path)?,
            None => MatchSettings::default(),
        };
        if let Some(seed) = args.seed {
            settings.seed = seed;
        }

        let mut store = JsonFileStore::open(&args.save_file);
        let mut ctx = MatchContext::new(settings, &store)?;
        if args.reset_high_score {
            ctx.reset_high_score(&mut store);
        }
        let mut canvas = AsciiCanvas::new(
            args.cols,
            args.rows,
            Vec2::new(ctx.arena.width, ctx.arena.height),
        );

        let mut outcome = Outcome::Playing;
        while !outcome.is_terminal() && ctx.time_ticks < args.max_ticks {
            let intents = autopilot(&ctx);
            outcome = tick(&mut ctx, &intents, &mut canvas, &mut store);

            if ctx.time_ticks % 600 == 0 {
                log::debug!(
                    "tick {}: {} bricks left, score {}",
                    ctx.time_ticks,
                    ctx.bricks.len(),
                    ctx.state.score
                );
            }
        }

        if !outcome.is_terminal() {
            log::warn!("Stopped after {} ticks without a result", args.max_ticks);
        }

        let status = ctx.status();
        println!("{}", canvas.to_text());
        println!("{}", status.score_text());
        println!("{}", status.high_score_text());
        if let Some(text) = status.outcome_text() {
            println!("{}", text);
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use clap::CommandFactory;

        #[test]
        fn test_command_is_well_formed() {
            Args::command().debug_assert();
        }

        #[test]
        fn test_defaults() {
            let args = Args::try_parse_from(["brickfall"]).unwrap();
            assert!(args.settings.is_none());
            assert_eq!(args.max_ticks, 100_000);
            assert_eq!(args.save_file, PathBuf::from("brickfall_highscore.json"));
            assert_eq!(args.seed, None);
            assert!(!args.reset_high_score);
        }

        #[test]
        fn test_flags_and_settings_path() {
            let args = Args::try_parse_from([
                "brickfall",
                "board.json",
                "--max-ticks",
                "50",
                "--seed",
                "7",
                "--reset-high-score",
            ])
            .unwrap();
            assert_eq!(args.settings, Some(PathBuf::from("board.json")));
            assert_eq!(args.max_ticks, 50);
            assert_eq!(args.seed, Some(7));
            assert!(args.reset_high_score);
        }

        #[test]
        fn test_bad_tick_cap_rejected() {
            assert!(Args::try_parse_from(["brickfall", "--max-ticks", "lots"]).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    let args = native::Args::parse();
    log::info!("Brickfall (native) starting...");

    if let Err(e) = native::run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
