//! Tic-tac-toe: board model, win detection and replayable history.

mod action;
mod history;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::Win;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
