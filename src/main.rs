//! Tic-tac-toe with replay - terminal client.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tictactoe_replay::{History, Position, Settings, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Print { moves }) => {
            initialize_stderr_tracing();
            print_game(&cli.print_moves(moves))
        }
        Some(Command::Play) | None => {
            let mut settings = Settings::load_or_default(&cli.config)?;
            if let Some(log_file) = &cli.log_file {
                settings = settings.with_log_file(log_file.clone());
            }
            initialize_file_tracing(&settings)?;
            info!(
                config = %cli.config.display(),
                found = cli.config.exists(),
                ?settings,
                "Settings resolved"
            );

            let history = match &cli.replay {
                Some(moves) => History::replay(&moves.0).context("Invalid --replay moves")?,
                None => History::new(),
            };
            run_tui(&settings, history)
        }
    }
}

/// Replays `moves` and prints each snapshot with its status.
#[instrument(skip_all, fields(moves = moves.len()))]
fn print_game(moves: &[Position]) -> Result<()> {
    let history = History::replay(moves).context("Invalid move sequence")?;
    print!("{}", history.transcript());
    info!(status = %history.status(), "Printed game");
    Ok(())
}

/// Logs to a file so output does not interfere with the TUI.
fn initialize_file_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
