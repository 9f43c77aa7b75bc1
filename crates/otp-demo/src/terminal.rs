//! Terminal lifecycle management.
//!
//! Terminal state is guaranteed to be restored on:
//! - Normal exit
//! - Panic (via the installed hook)

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Sets up the terminal for the demo.
///
/// - Enables raw mode
/// - Enters alternate screen
/// - Enables bracketed paste (over-length pastes exercise the widget's
///   deferred truncation) and mouse capture (clicks tap the widget)
///
/// Call `install_panic_hook()` before this to ensure restore on panic.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn setup() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )
    .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores terminal state. Idempotent and safe to call multiple times.
///
/// Mouse capture and bracketed paste must be disabled before leaving raw mode.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn restore() -> Result<()> {
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
///
/// Call this BEFORE `setup()`.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    // Terminal tests require a real TTY and are exercised manually:
    // - Terminal is restored on normal exit and on panic
    // - Mouse capture and bracketed paste are disabled on all exit paths
}
