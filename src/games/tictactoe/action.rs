//! Move and move-error types for tic-tac-toe.
//!
//! Moves are domain events, not side effects: the history derives them
//! from consecutive board snapshots so they can be listed and logged.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when playing a move or navigating history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The selected snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A raw board index outside 0-8.
    #[display("Invalid index: {}", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// Jump target past the end of the history.
    #[display("No move #{} (history has {} entries)", requested, available)]
    NoSuchMove {
        /// Requested move number.
        requested: usize,
        /// Number of snapshots in the history.
        available: usize,
    },
}
