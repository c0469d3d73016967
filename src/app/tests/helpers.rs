//! Shared test utilities for the app module.

use crate::app::App;
use crate::core::Window;
use crate::source::SourceEvent;
use anyhow::Result;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;

/// Creates an app with the given window and returns the sender that feeds it.
pub fn create_test_app(max_lines: usize) -> (App, mpsc::Sender<SourceEvent>) {
    let (tx, rx) = mpsc::channel(64);
    (App::new(Window::new(max_lines), rx), tx)
}

/// Queues events on the channel and lets the app drain them.
pub fn feed(app: &mut App, tx: &mpsc::Sender<SourceEvent>, events: Vec<SourceEvent>) {
    for event in events {
        tx.try_send(event).expect("test channel has capacity");
    }
    app.process_events();
}

/// Renders the app into a `TestBackend` and returns the buffer.
pub fn render_app(app: &App, width: u16, height: u16) -> Result<Buffer> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| app.render(frame))?;
    Ok(terminal.backend().buffer().clone())
}

/// Collects the symbols of one buffer row.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Creates a [`KeyEvent`] with the given code and modifiers.
pub fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c), KeyModifiers::NONE)
}
