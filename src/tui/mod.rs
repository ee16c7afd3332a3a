//! Terminal UI for tic-tac-toe.

mod action;
mod app;
mod input;
mod layout;
mod terminal_guard;
mod ui;

pub use action::{Action, Direction};
pub use app::App;
pub use input::{action_for_key, action_for_mouse, move_cursor};
pub use layout::ScreenLayout;

use crate::config::Settings;
use crate::games::tictactoe::History;
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use terminal_guard::TerminalGuard;
use tracing::{error, info, instrument};

/// Runs the interactive client until the user quits.
#[instrument(skip_all, fields(moves = history.len() - 1))]
pub fn run_tui(settings: &Settings, history: History) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    terminal_guard::install_panic_hook();
    let mut guard = TerminalGuard::enter().context("Failed to prepare terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(history, *settings.show_numbers());
    let tick = Duration::from_millis(*settings.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick);

    guard.cleanup()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    let mut screen = ScreenLayout::new(Rect::default());

    while app.running() {
        terminal.draw(|f| screen = ui::draw(f, &app))?;

        if !event::poll(tick)? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) => action_for_key(key),
            Event::Mouse(mouse) => action_for_mouse(mouse, &screen),
            _ => None,
        };
        if let Some(action) = action {
            app.apply(action);
        }
    }

    info!(moves = app.history().len() - 1, "Session finished");
    Ok(())
}
