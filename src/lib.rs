//! Scrollback - terminal tail view for typed log lines
//!
//! Shows the most recent lines of a growing log, colored and prefixed by
//! their category.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod logger;
pub mod source;
pub mod tui;
