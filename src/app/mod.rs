//! Main application state and logic.
//!
//! The application owns the log and re-projects it every frame:
//! - `events` - Source events and key handling
//! - `render` - UI rendering

mod events;
mod render;

#[cfg(test)]
mod tests;

use tokio::sync::mpsc;

use crate::core::{LogLine, Window};
use crate::source::SourceEvent;
use crate::tui::Theme;

/// Maximum number of log lines kept in memory.
///
/// Older lines are dropped from the front; the visible window is always
/// much smaller than this.
pub const MAX_RETAINED_LINES: usize = 5000;

/// State of the line source as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceState {
    /// Lines may still arrive.
    #[default]
    Reading,
    /// The input reached end of file.
    Closed,
    /// Reading stopped with an error.
    Failed,
}

/// Main application state.
pub struct App {
    /// Chronological log, most recent last.
    pub(crate) log: Vec<LogLine>,
    /// Number of trailing lines shown.
    pub(crate) window: Window,
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Current state of the line source.
    pub(crate) source_state: SourceState,
    /// Receiver for lines from the reader task.
    event_rx: mpsc::Receiver<SourceEvent>,
    /// Should quit flag.
    should_quit: bool,
}

impl App {
    /// Creates a new app reading source events from `event_rx`.
    #[must_use]
    pub fn new(window: Window, event_rx: mpsc::Receiver<SourceEvent>) -> Self {
        Self {
            log: Vec::new(),
            window,
            theme: Theme::default(),
            source_state: SourceState::default(),
            event_rx,
            should_quit: false,
        }
    }

    /// Returns the log collected so far.
    #[must_use]
    pub fn log(&self) -> &[LogLine] {
        &self.log
    }

    /// Returns the visible window size.
    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Returns the current source state.
    #[must_use]
    pub const fn source_state(&self) -> &SourceState {
        &self.source_state
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Appends a line, dropping the oldest lines past `MAX_RETAINED_LINES`.
    pub(crate) fn push_line(&mut self, line: LogLine) {
        self.log.push(line);
        if self.log.len() > MAX_RETAINED_LINES {
            let drain_count = self.log.len() - MAX_RETAINED_LINES;
            self.log.drain(0..drain_count);
        }
    }
}
