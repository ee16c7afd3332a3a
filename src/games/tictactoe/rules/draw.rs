//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::find_win;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winning triple.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_win(board).is_none()
}
