//! Terminal state guard for guaranteed cleanup.
//!
//! Restores the terminal when the client exits, whether normally, via an
//! early `?` return, or a panic (together with the hook from
//! [`install_panic_hook`]).

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enables raw mode, the alternate screen and mouse capture.
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        // Created before the remaining setup so a failure below still unwinds raw mode.
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Perform manual cleanup and prevent Drop from running cleanup again.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore() {
                tracing::warn!(error = %e, "Failed to restore terminal on drop");
            }
        }
    }
}

/// Chains a panic hook that restores the terminal before the default report.
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        original(info);
    }));
}

fn restore() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
    stdout.flush()?;
    Ok(())
}
