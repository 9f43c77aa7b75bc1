//! File-backed logging setup.
//!
//! The TUI owns stdout and stderr, so logs go to a file. `RUST_LOG` filters
//! as usual; the default level is `debug`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber writing to `path`.
///
/// The returned guard must stay alive for the process lifetime so buffered
/// log lines flush on exit.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
