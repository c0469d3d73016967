//! Log line records and their semantic categories.

use serde::{Deserialize, Serialize};

/// Semantic category of a log line.
///
/// The category drives presentation only; the text is never inspected.
/// Unknown category names parse to [`LineType::Plain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// Something finished successfully.
    Success,
    /// Something failed.
    Error,
    /// Informational progress.
    Info,
    /// Low-importance output rendered with reduced emphasis.
    Dim,
    /// Ordinary output with no emphasis or glyph.
    ///
    /// Must stay the last variant for `#[serde(other)]`.
    #[default]
    #[serde(other)]
    Plain,
}

impl LineType {
    /// All categories, plain first.
    pub const ALL: [Self; 5] = [
        Self::Plain,
        Self::Success,
        Self::Error,
        Self::Info,
        Self::Dim,
    ];
}

/// One emitted line of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    /// The literal content to display.
    pub text: String,
    /// The category used for styling.
    #[serde(rename = "type", default)]
    pub line_type: LineType,
}

impl LogLine {
    /// Creates a line of the given category.
    #[must_use]
    pub fn new(line_type: LineType, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line_type,
        }
    }

    /// Creates a plain line.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(LineType::Plain, text)
    }

    /// Creates a success line.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineType::Success, text)
    }

    /// Creates an error line.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineType::Error, text)
    }

    /// Creates an info line.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(LineType::Info, text)
    }

    /// Creates a dimmed line.
    #[must_use]
    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(LineType::Dim, text)
    }
}
