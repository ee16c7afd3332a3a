//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a single board snapshot. Rules are
//! separated from board storage so the history can run them against
//! whichever snapshot is selected.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, check_winner, find_win};
