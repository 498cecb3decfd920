//! Scoped terminal acquisition
//!
//! [`Tui::init`] switches the terminal to raw mode and the alternate screen.
//! Restoration runs at most once per acquisition, whichever path gets there
//! first: an explicit [`Tui::restore`], the `Drop` impl, or the panic hook
//! installed by [`install_panic_hook`]. The hook restores the terminal before
//! the panic message is printed, so the report lands on the normal screen.

use crate::error::AppError;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Set while the terminal is in raw / alternate-screen mode
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// The acquired terminal
pub struct Tui {
    terminal: CrosstermTerminal,
}

impl Tui {
    pub fn init() -> Result<Self, AppError> {
        enable_raw_mode().map_err(AppError::TerminalInit)?;
        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);

        let setup = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        match setup {
            Ok(terminal) => {
                tracing::debug!(target: "sortty::terminal", "terminal acquired");
                Ok(Tui { terminal })
            }
            Err(e) => {
                let _ = restore_terminal();
                Err(AppError::TerminalInit(e))
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }

    /// Leave raw mode and the alternate screen. Later calls are no-ops.
    pub fn restore(&mut self) -> Result<(), AppError> {
        restore_terminal().map_err(AppError::Terminal)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Undo [`Tui::init`] if it is still in effect
pub fn restore_terminal() -> io::Result<()> {
    if !TERMINAL_ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }
    tracing::debug!(target: "sortty::terminal", "restoring terminal");

    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Restore the terminal before the default panic report runs
pub fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            tracing::error!(target: "sortty::panic", %info, "panic");
            default_hook(info);
        }));
    });
}
