//! Event handling for the App.

use log::{debug, info, warn};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, SourceState};
use crate::core::LogLine;
use crate::source::SourceEvent;

impl App {
    /// Handles a key press.
    ///
    /// `q`, `Esc` and `Ctrl+C` quit. The view has no scrolling keys.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => debug!("Ignoring key {:?}", key.code),
        }
    }

    /// Drains pending events from the reader task.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                SourceEvent::Line(line) => self.push_line(line),
                SourceEvent::Closed => {
                    info!("Source closed with {} lines retained", self.log.len());
                    self.source_state = SourceState::Closed;
                    self.push_line(LogLine::dim("(input closed)"));
                }
                SourceEvent::Failed(message) => {
                    warn!("Source failed: {message}");
                    self.source_state = SourceState::Failed;
                    self.push_line(LogLine::error(message));
                }
            }
        }
    }
}
