//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Put the terminal into raw mode on the alternate screen.
//! - Restore terminal state on exit, even during panics, via `Drop`.
//!
//! Invariants / Assumptions:
//! - The guard must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;

/// Guard that restores the terminal when dropped.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, enabling mouse capture unless
    /// `no_mouse` is set.
    pub fn setup(no_mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on the guard undoes whatever part of the setup succeeded.
        let guard = Self { no_mouse };
        let mut stdout = io::stdout();
        if no_mouse {
            execute!(stdout, EnterAlternateScreen)?;
        } else {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: there is nothing left to report them to.
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
