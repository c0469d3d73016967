//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::source::{Input, SourceError};

/// Scrollback - tail a log in the terminal
///
/// Shows the most recent lines of a log, colored by line type. Input lines
/// may be raw text or JSON records like `{"type": "success", "text": "ok"}`.
/// If no input file is provided, reads from stdin.
#[derive(Parser, Debug)]
#[command(name = "scrollback", version, about, long_about = None)]
pub struct Args {
    /// Path to the log file (optional - if omitted, reads stdin)
    pub input_file: Option<PathBuf>,

    /// Maximum number of trailing lines to show (default 20)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub max_lines: Option<i64>,

    /// Remember --max-lines as the default for this directory
    #[arg(long, requires = "max_lines")]
    pub save: bool,
}

impl Args {
    /// Returns the input to read from.
    ///
    /// Stdin is only accepted when it is not a terminal, since the UI reads
    /// keys from the same terminal.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InteractiveStdin`] when no file is given and
    /// `stdin_is_terminal` is true.
    pub fn input(&self, stdin_is_terminal: bool) -> Result<Input, SourceError> {
        match &self.input_file {
            Some(path) => Ok(Input::File(path.clone())),
            None if stdin_is_terminal => Err(SourceError::InteractiveStdin),
            None => Ok(Input::Stdin),
        }
    }
}
