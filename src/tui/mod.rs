//! TUI presentation layer.

pub mod theme;
pub mod widgets;

pub use theme::Theme;
