//! Screen geometry shared by rendering and mouse hit-testing.

use crate::games::tictactoe::Position;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders};

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 12;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board footprint: three cells plus two separators each way.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// See [`BOARD_WIDTH`].
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HISTORY_WIDTH: u16 = 32;

/// Rectangles for every part of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    title: Rect,
    board: Rect,
    cells: [Rect; 9],
    status: Rect,
    history: Rect,
    help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into title, board, history panel, status and help.
    pub fn new(area: Rect) -> Self {
        let [title, body, status, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(area);

        let [board_panel, history] =
            Layout::horizontal([Constraint::Min(BOARD_WIDTH), Constraint::Length(HISTORY_WIDTH)])
                .areas(body);

        let board = center_rect(board_panel, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
        });

        Self {
            title,
            board,
            cells,
            status,
            history,
            help,
        }
    }

    /// Title bar.
    pub fn title(&self) -> Rect {
        self.title
    }

    /// Full board including separators.
    pub fn board(&self) -> Rect {
        self.board
    }

    /// One board cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Status line.
    pub fn status(&self) -> Rect {
        self.status
    }

    /// History panel including its border.
    pub fn history(&self) -> Rect {
        self.history
    }

    /// Interior of the history panel; entry `n` sits on row `n`.
    pub fn history_list(&self) -> Rect {
        history_block().inner(self.history)
    }

    /// Key help line.
    pub fn help(&self) -> Rect {
        self.help
    }

    /// Cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cell(*pos), column, row))
    }

    /// History entry index under a screen coordinate.
    ///
    /// The index may be past the last entry; the history rejects it.
    pub fn history_entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let list = self.history_list();
        contains(list, column, row).then(|| usize::from(row - list.y))
    }
}

/// Frame of the history panel.
pub fn history_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title("Game History")
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.left() && column < rect.right() && row >= rect.top() && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Length((area.width.saturating_sub(width)) / 2),
        Constraint::Length(width),
        Constraint::Length((area.width.saturating_sub(width)) / 2),
    ])
    .areas(area);
    let [_, centered, _] = Layout::vertical([
        Constraint::Length((area.height.saturating_sub(height)) / 2),
        Constraint::Length(height),
        Constraint::Length((area.height.saturating_sub(height)) / 2),
    ])
    .areas(horizontal);
    centered
}
