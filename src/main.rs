use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{DEFAULT_LOG_FILTER, GAME_OVER_DISPLAY_SECS, TICK_INTERVAL_MS};
use grid_snake::error::GameError;
use grid_snake::game::{GameState, TickOutcome};
use grid_snake::input::{GameInput, InputSource, KeyQueue};
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Classic Snake on a 30x15 grid. Arrows or WASD to steer, P to pause, Q to quit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the apple placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file (filter with `SNAKE_LOG`).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(error) = init_logging(path) {
            eprintln!("Failed to open log file {}: {error}", path.display());
            return ExitCode::FAILURE;
        }
    }

    install_panic_hook();

    match run(&cli) {
        Ok(score) => {
            println!("Final score: {score}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "fatal error");
            eprintln!("snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env("SNAKE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

/// Runs one game and returns the final score. The terminal is restored when
/// the session drops, before the caller prints anything.
fn run(cli: &Cli) -> Result<u32, GameError> {
    let mut session = TerminalSession::enter()?;
    let mut keys = KeyQueue::spawn()?;
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed)?,
        None => GameState::new()?,
    };
    info!(seed = ?cli.seed, "session started");

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);

    loop {
        let tick_started = Instant::now();

        if let Some(input) = keys.poll_input() {
            if input == GameInput::Quit {
                info!(score = state.score(), "quit requested");
                return Ok(state.score());
            }
            state.apply_input(input);
        }

        let outcome = state.tick()?;
        session.draw(&state.snapshot())?;

        if let TickOutcome::Died(reason) = outcome {
            debug!(?reason, "showing final score");
            thread::sleep(Duration::from_secs(GAME_OVER_DISPLAY_SECS));
            return Ok(state.score());
        }

        thread::sleep(tick_interval.saturating_sub(tick_started.elapsed()));
    }
}
