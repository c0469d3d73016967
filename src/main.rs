//! Scrollback - terminal tail view for typed log lines
//!
//! Entry point for the application.

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use scrollback_view::app::App;
use scrollback_view::cli::Args;
use scrollback_view::fs::{ScrollbackPaths, load_settings, remember_max_lines, resolve_window};
use scrollback_view::logger;
use scrollback_view::source::{self, SOURCE_CHANNEL_CAPACITY};

fn main() -> Result<()> {
    let args = Args::parse();
    let input = args.input(std::io::stdin().is_terminal())?;

    let paths = ScrollbackPaths::from_cwd()?;
    paths.ensure_state_dir()?;
    logger::init(&paths.log_file())?;

    let settings = match (args.save, args.max_lines) {
        (true, Some(max_lines)) => remember_max_lines(&paths.settings_file(), max_lines)?,
        _ => load_settings(&paths.settings_file())?,
    };
    let window = resolve_window(args.max_lines, &settings);
    info!("Starting scrollback with a window of {} lines", window.max_lines());

    // The reader runs on the runtime; the UI loop stays on this thread
    let runtime = source::build_runtime()?;
    let (event_tx, event_rx) = mpsc::channel(SOURCE_CHANNEL_CAPACITY);
    let reader = {
        let _guard = runtime.enter();
        source::spawn_reader(input, event_tx)
    };

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    let result = run_app(&mut terminal, App::new(window, event_rx));

    // Restore the terminal
    ratatui::restore();

    reader.abort();
    source::shutdown_runtime(runtime);

    if let Err(e) = &result {
        error!("Exiting with error: {e:#}");
    }
    info!("Exiting scrollback");

    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Poll for events with a short timeout
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        // Pull in any lines read since the last frame
        app.process_events();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
