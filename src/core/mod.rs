//! Core scrollback logic.
//!
//! This module contains the pieces that do not depend on a terminal:
//! - Log line records and their categories
//! - The windowed projection from a log to drawable rows

pub mod line;
pub mod view;

pub use line::{LineType, LogLine};
pub use view::{
    DEFAULT_MAX_LINES, Emphasis, PLACEHOLDER_TEXT, Presentation, Row, RowColor, Window, project,
};
