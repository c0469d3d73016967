//! Custom TUI widgets.

pub mod scrollback;

pub use scrollback::{HORIZONTAL_INSET, ScrollbackWidget};
