//! Status of a single board snapshot.

use super::rules::{Win, find_win};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What a snapshot means for the players looking at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and `next` is due to move.
    InProgress {
        /// Player whose turn it is.
        next: Player,
    },
    /// A player completed a line.
    Won(Win),
    /// Every square is taken and nobody completed a line.
    Draw,
}

impl GameStatus {
    /// Evaluates `board` as the snapshot after `move_number` moves.
    ///
    /// A win takes precedence over a full board.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, move_number: usize) -> Self {
        if let Some(win) = find_win(board) {
            GameStatus::Won(win)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: Player::for_move_number(move_number),
            }
        }
    }

    /// Returns true once no further move can be made.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(win) => Some(win.player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.player),
            GameStatus::Draw => write!(f, "Game ended in a draw!"),
        }
    }
}
