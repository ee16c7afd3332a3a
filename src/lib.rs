//! Two-player tic-tac-toe with replayable move history.
//!
//! # Architecture
//!
//! - **Games**: board model, win detection and the snapshot history
//! - **TUI**: ratatui client rendering the selected snapshot
//! - **Config**: TOML settings for the client
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{History, Player, Position};
//!
//! let mut history = History::new();
//! history.play(Position::Center)?;
//! history.play(Position::TopLeft)?;
//! history.jump_to(1)?;
//! assert_eq!(history.next_player(), Player::O);
//! # Ok::<(), tictactoe_replay::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameStatus, History, HistoryEntry, Move, MoveError, Player, Position, Square, Win,
    rules,
};

// Crate-level exports - Terminal client
pub use tui::{
    Action, App, Direction, ScreenLayout, action_for_key, action_for_mouse, move_cursor, run_tui,
};
