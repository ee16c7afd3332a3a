//! Keyboard and mouse mapping.

use super::action::{Action, Direction};
use super::layout::ScreenLayout;
use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

/// Moves cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char('[') | KeyCode::PageUp => Action::StepBack,
        KeyCode::Char(']') | KeyCode::PageDown => Action::StepForward,
        KeyCode::Home => Action::JumpToStart,
        KeyCode::End => Action::JumpToLatest,
        KeyCode::Char(c) => Action::Place(c.to_digit(10).and_then(Position::from_key_number)?),
        _ => return None,
    };
    trace!(?key, ?action, "Mapped key");
    Some(action)
}

/// Maps a left click to an action by hit-testing the last rendered layout.
pub fn action_for_mouse(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
        return Some(Action::Place(pos));
    }
    layout
        .history_entry_at(mouse.column, mouse.row)
        .map(Action::JumpTo)
}
