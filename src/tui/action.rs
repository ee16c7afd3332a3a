//! Actions the client can perform in response to input.

use crate::games::tictactoe::Position;

/// Cursor movement direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// All mappable client actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Play at the cursor.
    PlaceAtCursor,
    /// Play at a specific cell.
    Place(Position),
    /// Select a snapshot by move number.
    JumpTo(usize),
    /// Select the previous snapshot.
    StepBack,
    /// Select the next snapshot.
    StepForward,
    /// Select the empty board.
    JumpToStart,
    /// Select the last snapshot.
    JumpToLatest,
    /// Discard the history and start over.
    Restart,
    /// Leave the client.
    Quit,
}
