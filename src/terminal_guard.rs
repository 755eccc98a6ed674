//! Terminal lifecycle
//!
//! Raw mode and the alternate screen are entered once and must be left on
//! every exit path: normal return, error, panic, and termination signals.

use crate::error::{RandrTuiError, Result};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use tracing::{debug, info, warn};

/// Holds the terminal in TUI mode until dropped.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enable raw mode, enter the alternate screen and build the backend.
    pub fn enter() -> Result<Self> {
        debug!("Initializing terminal for TUI mode");

        enable_raw_mode()
            .map_err(|e| RandrTuiError::terminal(format!("Failed to enable raw mode: {}", e)))?;
        if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
            restore_terminal();
            return Err(RandrTuiError::terminal(format!(
                "Failed to enter alternate screen: {}",
                e
            )));
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| {
            restore_terminal();
            RandrTuiError::terminal(format!("Failed to create terminal: {}", e))
        })?;

        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("TerminalGuard dropped, restoring terminal");
        if let Err(e) = self.terminal.show_cursor() {
            debug!("Failed to show cursor: {}", e);
        }
        restore_terminal();
    }
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);
}

/// Restore the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

/// Initialize global signal handlers for graceful shutdown
/// Handles SIGINT, SIGTERM, and SIGHUP
/// Call this once at program start
pub fn init_signal_handlers() -> std::io::Result<()> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::thread;

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;

    thread::spawn(move || {
        for sig in signals.forever() {
            let signal_name = match sig {
                SIGINT => "SIGINT",
                SIGTERM => "SIGTERM",
                SIGHUP => "SIGHUP",
                _ => "UNKNOWN",
            };

            info!("Received {} signal, restoring terminal", signal_name);
            restore_terminal();

            // An in-flight apply command is left running
            std::process::exit(128 + sig);
        }
        warn!("Signal iterator closed");
    });

    Ok(())
}
