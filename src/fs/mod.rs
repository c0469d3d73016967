//! File system locations and persisted settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod settings;

pub use settings::{
    PersistedSettings, load_settings, remember_max_lines, resolve_window, save_settings,
};

/// Name of the per-directory state folder.
pub const STATE_DIR: &str = ".scrollback";

/// Holds all scrollback-related paths derived from a base directory.
///
/// Tests pass a temporary directory; the binary uses the working directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use scrollback_view::fs::ScrollbackPaths;
///
/// let paths = ScrollbackPaths::new(Path::new("/tmp/test"));
/// assert_eq!(
///     paths.settings_file(),
///     Path::new("/tmp/test/.scrollback/settings.json")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ScrollbackPaths {
    base: PathBuf,
}

impl ScrollbackPaths {
    /// Creates paths rooted at the given base directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> Result<Self> {
        let base = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base })
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the `.scrollback` directory path.
    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.base.join(STATE_DIR)
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.state_dir().join("settings.json")
    }

    /// Returns the debug log file path.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.state_dir().join("scrollback.log")
    }

    /// Creates the `.scrollback` directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_state_dir(&self) -> Result<()> {
        let dir = self.state_dir();
        if !dir.exists() {
            std::fs::create_dir_all(&dir).context("Failed to create .scrollback directory")?;
        }
        Ok(())
    }
}
