//! Rendering methods for the App.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{App, SourceState};
use crate::tui::widgets::ScrollbackWidget;

impl App {
    /// Renders the header line and the scrollback below it.
    pub fn render(&self, frame: &mut Frame) {
        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        self.render_header(frame, header);
        frame.render_widget(
            ScrollbackWidget::new(&self.log, self.window, &self.theme),
            body,
        );
    }

    /// Renders the single-line header.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let status = match self.source_state {
            SourceState::Reading => "",
            SourceState::Closed => " (closed)",
            SourceState::Failed => " (failed)",
        };

        let header = Line::from(vec![
            Span::styled(" Scrollback ", self.theme.header_style()),
            Span::styled(
                format!("[last {}]{status}", self.window.max_lines()),
                self.theme.muted_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }
}
