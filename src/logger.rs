//! File-based logging using simplelog.
//!
//! The terminal belongs to the UI while the app runs, so log records go to
//! `.scrollback/scrollback.log` instead of stderr.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Maps a `RUST_LOG` value to a level filter, defaulting to `Info`.
#[must_use]
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_lowercase).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initializes the global logger, truncating the file at `path`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is
/// already installed.
pub fn init(path: &Path) -> Result<()> {
    let level = level_from_env(std::env::var("RUST_LOG").ok().as_deref());

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // UTC if the local offset is unknown
        .build();

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    WriteLogger::init(level, config, file).context("Failed to initialize logger")
}
