//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::layout::{self, ScreenLayout};
use crate::games::tictactoe::{GameStatus, HistoryEntry, Player, Position, Square, Win};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Draws the whole screen and returns the layout used, for hit-testing.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let screen = ScreenLayout::new(frame.area());
    let history = app.history();

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, screen.title());

    draw_board(frame, &screen, app, history.winning_line());
    draw_history(frame, screen.history(), &history.entries());

    let status_style = match history.status() {
        GameStatus::Won(_) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta),
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(app.status_line())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, screen.status());

    let help = Paragraph::new(
        "Arrows/Enter or 1-9: move | Click: cell or history | [ ] Home End: replay | R: Restart | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, screen.help());

    screen
}

fn draw_board(frame: &mut Frame, screen: &ScreenLayout, app: &App, win: Option<Win>) {
    let board_area = screen.board();
    let separator = Style::default().fg(Color::DarkGray);

    for col in 1..3u16 {
        let x = board_area.x + col * (layout::CELL_WIDTH + 1) - 1;
        let line = Rect::new(x, board_area.y, 1, board_area.height).intersection(board_area);
        let bar = vec![Line::from("│"); usize::from(line.height)];
        frame.render_widget(Paragraph::new(bar).style(separator), line);
    }
    for row in 1..3u16 {
        let y = board_area.y + row * (layout::CELL_HEIGHT + 1) - 1;
        let line = Rect::new(board_area.x, y, board_area.width, 1).intersection(board_area);
        let segment = "─".repeat(usize::from(layout::CELL_WIDTH));
        let text = [segment.as_str(); 3].join("┼");
        frame.render_widget(Paragraph::new(text).style(separator), line);
    }

    let board = app.history().current_board();
    for pos in Position::ALL {
        let highlighted = win.is_some_and(|w| w.contains(pos));
        draw_cell(frame, screen.cell(pos), app, board.get(pos), pos, highlighted);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    square: Square,
    pos: Position,
    winning: bool,
) {
    let (symbol, base_style) = match square {
        Square::Empty if app.show_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match (winning, pos == app.cursor()) {
        (true, true) => base_style
            .bg(Color::Yellow)
            .add_modifier(Modifier::SLOW_BLINK | Modifier::UNDERLINED),
        (true, false) => base_style.bg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK),
        (false, true) => base_style.bg(Color::White).fg(Color::Black),
        (false, false) => base_style,
    };

    let text = vec![
        Line::default(),
        Line::from(Span::raw(symbol)),
        Line::default(),
    ];
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, entries: &[HistoryEntry]) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let label = match entry.played() {
                Some(played) => format!("{} ({})", entry.description(), played),
                None => entry.description().clone(),
            };
            let style = if *entry.is_current() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(layout::history_block()), area);
}
