//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};

use crate::core::{Emphasis, Row, RowColor};

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent/highlight color.
    pub accent: Color,
    /// Success color (green).
    pub success: Color,
    /// Error color (red).
    pub error: Color,
    /// Info color (cyan).
    pub info: Color,
    /// Muted/secondary text color.
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Style for the header/title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Maps a row color to a terminal color.
    #[must_use]
    pub const fn color(&self, color: RowColor) -> Color {
        match color {
            RowColor::Green => self.success,
            RowColor::Red => self.error,
            RowColor::Cyan => self.info,
        }
    }

    /// Style for a scrollback row.
    ///
    /// Rows without a color keep the terminal's default foreground.
    #[must_use]
    pub fn row_style(&self, row: &Row) -> Style {
        let mut style = Style::default();
        if let Some(color) = row.color {
            style = style.fg(self.color(color));
        }
        if row.emphasis == Emphasis::Dimmed {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}
