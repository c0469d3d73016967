//! Scrollback viewer widget.
//!
//! Draws the rows produced by [`crate::core::project`]: one line per row,
//! glyph first, inset from the left and right edges. When the area is shorter
//! than the row count the oldest rows are clipped so the newest stay visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget},
};

use crate::core::{LogLine, Row, Window, project};
use crate::tui::Theme;

/// Horizontal inset, in cells, on each side of the rows.
pub const HORIZONTAL_INSET: u16 = 1;

/// Renders the trailing window of a log.
pub struct ScrollbackWidget<'a> {
    /// Full log; only the trailing window is drawn.
    lines: &'a [LogLine],
    window: Window,
    theme: &'a Theme,
}

impl<'a> ScrollbackWidget<'a> {
    /// Creates a new scrollback widget.
    #[must_use]
    pub const fn new(lines: &'a [LogLine], window: Window, theme: &'a Theme) -> Self {
        Self {
            lines,
            window,
            theme,
        }
    }

    fn row_to_line(&self, row: Row) -> Line<'static> {
        let style = self.theme.row_style(&row);
        let mut spans = Vec::with_capacity(2);
        if let Some(glyph) = row.glyph {
            spans.push(Span::styled(glyph, style));
        }
        spans.push(Span::styled(row.text, style));
        Line::from(spans)
    }
}

impl Widget for ScrollbackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::new().padding(Padding::horizontal(HORIZONTAL_INSET));
        let visible_height = block.inner(area).height as usize;

        let rows = project(self.lines, self.window);
        let hidden = rows.len().saturating_sub(visible_height);

        let lines: Vec<Line> = rows
            .into_iter()
            .skip(hidden)
            .map(|row| self.row_to_line(row))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
