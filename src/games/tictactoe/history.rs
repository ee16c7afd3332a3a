//! Snapshot history with jump-to-any-move replay.
//!
//! The history stores one full [`Board`] per move, starting from the empty
//! board. A cursor (`current`) selects the snapshot being shown and played
//! from. Playing after jumping back discards the snapshots past the cursor,
//! so the list always describes a single line of play.

use super::rules::{Win, find_win};
use super::{Board, GameStatus, Move, MoveError, Player, Position, Square};
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, info, instrument, warn};

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct HistoryEntry {
    /// Snapshot index (0 is the empty board).
    move_number: usize,
    /// `Game start` or `Move #n`.
    description: String,
    /// Whether this snapshot is the selected one.
    is_current: bool,
    /// The mark that produced this snapshot; `None` for the empty board.
    played: Option<Move>,
}

/// Ordered board snapshots plus the selected move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
    current: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Builds a history by playing `positions` in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit while replaying.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for pos in positions {
            history.play(*pos)?;
        }
        Ok(history)
    }

    /// The selected snapshot.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Index of the selected snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in play order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Player due to move from the selected snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move_number(self.current)
    }

    /// Status of the selected snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.current)
    }

    /// Winning triple on the selected snapshot, if any.
    pub fn winning_line(&self) -> Option<Win> {
        find_win(self.current_board())
    }

    /// Places the next player's mark on the selected snapshot.
    ///
    /// Snapshots after the selected one are discarded, the new snapshot is
    /// appended and becomes the selection.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the selected snapshot already has a winner.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    ///
    /// A rejected move leaves the history untouched.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        let board = *self.current_board();

        if find_win(&board).is_some() {
            debug!("Rejecting move on finished game");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Rejecting move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            info!(discarded, "Truncating history after rewind");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(board.with_mark(pos, player));
        self.current = self.snapshots.len() - 1;

        debug_assert_eq!(self.current_board().mark_count(), self.current);

        let status = self.status();
        info!(player = %player, position = %pos, %status, "Move played");
        Ok(status)
    }

    /// Plays at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as [`History::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Invalid index");
            MoveError::OutOfBounds(index)
        })?;
        self.play(pos)
    }

    /// Selects an existing snapshot without changing the list.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoSuchMove`] if `move_number` is past the last snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        if move_number >= self.snapshots.len() {
            return Err(MoveError::NoSuchMove {
                requested: move_number,
                available: self.snapshots.len(),
            });
        }
        debug!(from = self.current, to = move_number, "Jumping in history");
        self.current = move_number;
        Ok(())
    }

    /// Selects the previous snapshot; stays put at the game start.
    pub fn step_back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Selects the following snapshot; stays put at the latest move.
    pub fn step_forward(&mut self) {
        if self.current + 1 < self.snapshots.len() {
            self.current += 1;
        }
    }

    /// Selects the empty board.
    pub fn jump_to_start(&mut self) {
        self.current = 0;
    }

    /// Selects the last snapshot.
    pub fn jump_to_latest(&mut self) {
        self.current = self.snapshots.len() - 1;
    }

    /// The move that turned snapshot `move_number - 1` into `move_number`.
    pub fn move_at(&self, move_number: usize) -> Option<Move> {
        if move_number == 0 || move_number >= self.snapshots.len() {
            return None;
        }
        let before = self.snapshots[move_number - 1].squares();
        let after = self.snapshots[move_number].squares();
        Position::ALL
            .into_iter()
            .zip(before.iter().zip(after))
            .find_map(|(pos, (was, now))| match (was, now) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(*player, pos)),
                _ => None,
            })
    }

    /// Every move leading to the last snapshot, in order.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.snapshots.len())
            .filter_map(|n| self.move_at(n))
            .collect()
    }

    /// Plain-text transcript: every snapshot with its label, then the status
    /// of the selected snapshot.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for entry in self.entries() {
            match entry.played() {
                Some(played) => out.push_str(&format!("{} ({})\n", entry.description(), played)),
                None => out.push_str(&format!("{}\n", entry.description())),
            }
            out.push_str(&self.snapshots[*entry.move_number()].display());
            out.push_str("\n\n");
        }
        out.push_str(&self.status().to_string());
        out.push('\n');
        out
    }

    /// One entry per snapshot for the move list.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.snapshots.len())
            .map(|n| {
                let description = if n > 0 {
                    format!("Move #{}", n)
                } else {
                    "Game start".to_string()
                };
                HistoryEntry::new(n, description, n == self.current, self.move_at(n))
            })
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_new_history_is_game_start() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.next_player(), Player::X);
        assert_eq!(history.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_play_alternates_players() {
        let mut history = History::new();
        history.play(Position::Center).unwrap();
        history.play(Position::TopLeft).unwrap();
        let board = history.current_board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(history.next_player(), Player::X);
    }

    #[test]
    fn test_rejected_move_leaves_history_untouched() {
        let mut history = History::new();
        history.play(Position::Center).unwrap();
        let before = history.clone();
        assert_eq!(
            history.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut history = History::new();
        assert_eq!(history.play_index(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(history.len(), 1);
        assert!(history.play_index(8).is_ok());
    }

    #[test]
    fn test_jump_then_play_truncates_future() {
        let mut history =
            History::replay(&[Position::Center, Position::TopLeft, Position::TopRight]).unwrap();
        assert_eq!(history.len(), 4);

        history.jump_to(1).unwrap();
        assert_eq!(history.next_player(), Player::O);
        history.play(Position::BottomRight).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_move(), 2);
        assert!(history.current_board().is_empty(Position::TopLeft));
        assert_eq!(
            history.current_board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = History::new();
        assert_eq!(
            history.jump_to(1),
            Err(MoveError::NoSuchMove {
                requested: 1,
                available: 1
            })
        );
    }

    #[test]
    fn test_step_navigation_clamps() {
        let mut history = History::replay(&[Position::Center, Position::TopLeft]).unwrap();
        history.step_forward();
        assert_eq!(history.current_move(), 2);
        history.jump_to_start();
        history.step_back();
        assert_eq!(history.current_move(), 0);
        history.step_forward();
        assert_eq!(history.current_move(), 1);
        history.jump_to_latest();
        assert_eq!(history.current_move(), 2);
    }

    #[test]
    fn test_entries_describe_moves() {
        let mut history = History::replay(&[Position::Center, Position::TopLeft]).unwrap();
        history.jump_to(1).unwrap();
        let entries = history.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].description(), "Game start");
        assert_eq!(entries[0].played(), &None);
        assert_eq!(entries[2].description(), "Move #2");
        assert_eq!(
            entries[2].played(),
            &Some(Move::new(Player::O, Position::TopLeft))
        );
        assert!(*entries[1].is_current());
        assert!(!*entries[2].is_current());
    }

    #[test]
    fn test_transcript_lists_every_snapshot() {
        let history = History::replay(&[Position::Center, Position::TopLeft]).unwrap();
        let transcript = history.transcript();
        assert!(transcript.starts_with("Game start\n1|2|3\n-+-+-\n4|5|6"));
        assert!(transcript.contains("Move #1 (X -> Center)\n1|2|3\n-+-+-\n4|X|6"));
        assert!(transcript.contains("Move #2 (O -> Top-left)\nO|2|3"));
        assert!(transcript.ends_with("Next player: X\n"));
    }
}
