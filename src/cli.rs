//! Command-line interface for tictactoe_replay.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_replay::Position;

/// Two-player tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Two-player tic-tac-toe with replayable history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Override the log file from the settings
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start from these moves, given as cell numbers 1-9 (e.g. "5137")
    #[arg(long, value_parser = parse_moves)]
    pub replay: Option<MoveList>,

    /// Subcommand to run (defaults to the interactive client)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play,

    /// Replay moves and print every snapshot without starting the UI
    ///
    /// Moves given with `--replay` are played first.
    Print {
        /// Cell numbers 1-9 in play order
        #[arg(value_parser = parse_moves)]
        moves: MoveList,
    },
}

impl Cli {
    /// Moves for the `print` subcommand: `--replay` first, then `moves`.
    pub fn print_moves(&self, moves: &MoveList) -> Vec<Position> {
        self.replay
            .iter()
            .flat_map(|prefix| prefix.0.iter())
            .chain(&moves.0)
            .copied()
            .collect()
    }
}

/// Moves given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList(pub Vec<Position>);

/// Parses cell numbers 1-9; commas and whitespace are ignored.
pub fn parse_moves(s: &str) -> Result<MoveList, String> {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            c.to_digit(10)
                .and_then(Position::from_key_number)
                .ok_or_else(|| format!("'{}' is not a cell number 1-9", c))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(MoveList)
}
