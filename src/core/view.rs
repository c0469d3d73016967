//! Scrollback projection.
//!
//! Maps a chronological log and a window size to the rows that should be
//! drawn. The output is plain data; drawing it is the job of
//! [`crate::tui::widgets::ScrollbackWidget`] or any other backend.

use serde::Serialize;

use super::line::{LineType, LogLine};

/// Number of trailing lines shown when nothing else is configured.
pub const DEFAULT_MAX_LINES: usize = 20;

/// Text of the row shown when the log is empty.
pub const PLACEHOLDER_TEXT: &str = "Type / for commands, or enter a task";

/// Maximum number of trailing log lines visible at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Window {
    max_lines: usize,
}

impl Window {
    /// Creates a window showing at most `max_lines` lines.
    #[must_use]
    pub const fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }

    /// Creates a window from a possibly non-positive size.
    ///
    /// Zero and negative sizes produce an empty window.
    #[must_use]
    pub fn from_signed(max_lines: i64) -> Self {
        if max_lines <= 0 {
            return Self::new(0);
        }
        Self::new(usize::try_from(max_lines).unwrap_or(usize::MAX))
    }

    /// Returns the window size.
    #[must_use]
    pub const fn max_lines(self) -> usize {
        self.max_lines
    }

    /// Returns the trailing slice of `log` that fits in this window.
    #[must_use]
    pub fn select(self, log: &[LogLine]) -> &[LogLine] {
        &log[log.len().saturating_sub(self.max_lines)..]
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES)
    }
}

/// Foreground color of a row, independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowColor {
    Green,
    Red,
    Cyan,
}

/// Emphasis level of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Normal,
    Dimmed,
}

/// How a line category is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Leading glyph, including its trailing space.
    pub glyph: Option<&'static str>,
    /// Explicit foreground color; `None` leaves the terminal default.
    pub color: Option<RowColor>,
    pub emphasis: Emphasis,
}

impl LineType {
    /// Returns the glyph, color and emphasis for this category.
    #[must_use]
    pub const fn presentation(self) -> Presentation {
        match self {
            Self::Success => Presentation {
                glyph: Some("✓ "),
                color: Some(RowColor::Green),
                emphasis: Emphasis::Normal,
            },
            Self::Error => Presentation {
                glyph: Some("✗ "),
                color: Some(RowColor::Red),
                emphasis: Emphasis::Normal,
            },
            Self::Info => Presentation {
                glyph: Some("→ "),
                color: Some(RowColor::Cyan),
                emphasis: Emphasis::Normal,
            },
            Self::Dim => Presentation {
                glyph: None,
                color: None,
                emphasis: Emphasis::Dimmed,
            },
            Self::Plain => Presentation {
                glyph: None,
                color: None,
                emphasis: Emphasis::Normal,
            },
        }
    }
}

/// A single row ready for drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub glyph: Option<&'static str>,
    pub color: Option<RowColor>,
    pub emphasis: Emphasis,
    pub text: String,
}

impl Row {
    /// Builds the row for a log line.
    #[must_use]
    pub fn from_line(line: &LogLine) -> Self {
        let Presentation {
            glyph,
            color,
            emphasis,
        } = line.line_type.presentation();
        Self {
            glyph,
            color,
            emphasis,
            text: line.text.clone(),
        }
    }

    /// Builds the row shown in place of an empty log.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            glyph: None,
            color: None,
            emphasis: Emphasis::Dimmed,
            text: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

/// Projects the trailing window of `log` into drawable rows.
///
/// An empty log yields exactly one placeholder row whatever the window size.
/// A non-empty log yields `min(log.len(), window.max_lines())` rows in
/// chronological order, so an empty window over a non-empty log yields none.
#[must_use]
pub fn project(log: &[LogLine], window: Window) -> Vec<Row> {
    if log.is_empty() {
        return vec![Row::placeholder()];
    }
    window.select(log).iter().map(Row::from_line).collect()
}
