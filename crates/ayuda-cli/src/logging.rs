// Rust guideline compliant 2026-02-06

//! Tracing subscriber setup.

use anyhow::Result;
use ayuda_core::LogLevel;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// Events go to stderr, or as JSON lines to `log_file` when one is given.
/// Keep the returned guard alive until exit so buffered file output is
/// flushed.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be
/// opened.
pub fn init_tracing(log_level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = Level::from(log_level.parse::<LogLevel>()?);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing::subscriber::set_global_default(
            fmt()
                .with_max_level(level)
                .with_target(false)
                .json()
                .with_writer(writer)
                .finish(),
        )?;
        return Ok(Some(guard));
    }

    tracing::subscriber::set_global_default(
        fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish(),
    )?;
    Ok(None)
}
