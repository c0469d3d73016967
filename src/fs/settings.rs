//! Settings persistence module.
//!
//! Settings are stored as JSON in `.scrollback/settings.json`.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::Window;

/// Persisted settings that are saved between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PersistedSettings {
    /// Number of trailing lines to show. Signed so that a hand-edited
    /// negative value loads and is treated as an empty window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<i64>,
}

/// Resolves the window size from the command line and settings.
///
/// The command line wins over the settings file, which wins over the
/// default of 20 lines.
#[must_use]
pub fn resolve_window(cli_max_lines: Option<i64>, settings: &PersistedSettings) -> Window {
    cli_max_lines
        .or(settings.max_lines)
        .map_or_else(Window::default, Window::from_signed)
}

/// Loads settings from the specified settings file path.
///
/// If the file doesn't exist, returns default settings.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<PersistedSettings> {
    if !path.exists() {
        debug!("No settings file at {}, using defaults", path.display());
        return Ok(PersistedSettings::default());
    }

    let content = std::fs::read_to_string(path).context("Failed to read settings file")?;

    serde_json::from_str(&content).context("Failed to parse settings file")
}

/// Saves settings to the specified settings file path.
///
/// The parent directory must exist (caller should ensure this).
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_settings(path: &Path, settings: &PersistedSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    std::fs::write(path, json).context("Failed to write settings file")
}

/// Stores `max_lines` as the default window, keeping other settings.
///
/// # Errors
///
/// Returns an error if the existing file cannot be parsed or the new one
/// cannot be written.
pub fn remember_max_lines(path: &Path, max_lines: i64) -> Result<PersistedSettings> {
    let mut settings = load_settings(path)?;
    settings.max_lines = Some(max_lines);
    save_settings(path, &settings)?;
    debug!("Saved max_lines={max_lines} to {}", path.display());
    Ok(settings)
}
