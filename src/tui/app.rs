//! Application state and logic.

use super::action::Action;
use super::input::move_cursor;
use crate::games::tictactoe::{History, Position};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    history: History,
    cursor: Position,
    message: Option<String>,
    show_numbers: bool,
    running: bool,
}

impl App {
    /// Creates an application starting from `history`.
    pub fn new(history: History, show_numbers: bool) -> Self {
        Self {
            history,
            cursor: Position::Center,
            message: None,
            show_numbers,
            running: true,
        }
    }

    /// The game history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty squares show their key number.
    pub fn show_numbers(&self) -> bool {
        self.show_numbers
    }

    /// False once the user asked to quit.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Text for the status line: the last rejection, else the game status.
    pub fn status_line(&self) -> String {
        match &self.message {
            Some(message) => format!("{} ({})", self.history.status(), message),
            None => self.history.status().to_string(),
        }
    }

    /// Applies one action to the application state.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        self.message = None;

        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::JumpTo(move_number) => {
                if let Err(e) = self.history.jump_to(move_number) {
                    debug!(error = %e, "Ignoring jump");
                }
            }
            Action::StepBack => self.history.step_back(),
            Action::StepForward => self.history.step_forward(),
            Action::JumpToStart => self.history.jump_to_start(),
            Action::JumpToLatest => self.history.jump_to_latest(),
            Action::Restart => {
                info!("Restarting game");
                self.history = History::new();
                self.cursor = Position::Center;
            }
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }

    fn place(&mut self, pos: Position) {
        if let Err(e) = self.history.play(pos) {
            self.message = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{MoveError, Player, Square};
    use crate::tui::action::Direction;

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(History::new(), true);
        app.apply(Action::MoveCursor(Direction::Up));
        app.apply(Action::PlaceAtCursor);
        assert_eq!(
            app.history().current_board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.status_line(), "Next player: O");
    }

    #[test]
    fn test_occupied_square_reported() {
        let mut app = App::new(History::new(), true);
        app.apply(Action::Place(Position::Center));
        app.apply(Action::Place(Position::Center));
        assert_eq!(
            app.status_line(),
            format!(
                "Next player: O ({})",
                MoveError::SquareOccupied(Position::Center)
            )
        );
        assert_eq!(app.history().len(), 2);

        app.apply(Action::Place(Position::TopLeft));
        assert_eq!(app.status_line(), "Next player: X");
    }

    #[test]
    fn test_quit_and_restart() {
        let mut app = App::new(History::replay(&[Position::Center]).unwrap(), false);
        app.apply(Action::Restart);
        assert_eq!(app.history().len(), 1);
        assert!(app.running());
        app.apply(Action::Quit);
        assert!(!app.running());
    }

    #[test]
    fn test_invalid_jump_is_ignored() {
        let mut app = App::new(History::new(), true);
        app.apply(Action::JumpTo(7));
        assert_eq!(app.history().current_move(), 0);
    }
}
