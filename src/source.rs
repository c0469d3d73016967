//! Log line source.
//!
//! Reads lines from a file or stdin on a background task and forwards them
//! to the UI over a channel. Each input line is either a JSON record
//! (`{"type": "success", "text": "build ok"}`) or raw text, which becomes a
//! plain line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::LogLine;

/// Capacity of the channel between the reader task and the UI.
pub const SOURCE_CHANNEL_CAPACITY: usize = 1024;

/// How long shutdown waits for the reader task before abandoning it.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(100);

/// Where log lines are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Human-readable name for headers and log messages.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Events sent from the reader task to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// A new line was read.
    Line(LogLine),
    /// The input reached end of file.
    Closed,
    /// Reading stopped because of an error.
    Failed(String),
}

/// Errors raised while opening an input.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no input file given and stdin is a terminal; pipe a log in or pass a file path")]
    InteractiveStdin,
}

/// Parses one raw input line into a log line.
///
/// JSON objects matching the [`LogLine`] shape are taken as-is. Anything
/// else, including malformed JSON, becomes a plain line with the raw text.
#[must_use]
pub fn parse_record(raw: &str) -> LogLine {
    if raw.trim_start().starts_with('{') {
        if let Ok(line) = serde_json::from_str::<LogLine>(raw) {
            return line;
        }
    }
    LogLine::plain(raw)
}

/// Opens a file for reading.
///
/// # Errors
///
/// Returns [`SourceError::Open`] if the file cannot be opened.
pub async fn open_file(path: &Path) -> Result<tokio::fs::File, SourceError> {
    tokio::fs::File::open(path)
        .await
        .map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Streams lines from `reader` into `tx` until end of input.
///
/// Sends [`SourceEvent::Closed`] at end of file or [`SourceEvent::Failed`]
/// on a read error. Returns early without a final event if the receiver
/// has been dropped.
pub async fn stream_lines<R>(reader: R, tx: mpsc::Sender<SourceEvent>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut count: usize = 0;

    loop {
        match lines.next_line().await {
            Ok(Some(raw)) => {
                count += 1;
                if tx.send(SourceEvent::Line(parse_record(&raw))).await.is_err() {
                    debug!("Receiver dropped after {count} lines");
                    return;
                }
            }
            Ok(None) => {
                info!("Input closed after {count} lines");
                let _ = tx.send(SourceEvent::Closed).await;
                return;
            }
            Err(e) => {
                warn!("Failed to read input: {e}");
                let _ = tx.send(SourceEvent::Failed(e.to_string())).await;
                return;
            }
        }
    }
}

/// Spawns a task that reads `input` and forwards its lines to `tx`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_reader(input: Input, tx: mpsc::Sender<SourceEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Reading log lines from {}", input.label());
        match input {
            Input::Stdin => stream_lines(tokio::io::stdin(), tx).await,
            Input::File(path) => match open_file(&path).await {
                Ok(file) => stream_lines(file, tx).await,
                Err(e) => {
                    warn!("{e}");
                    let _ = tx.send(SourceEvent::Failed(e.to_string())).await;
                }
            },
        }
    })
}

/// Builds the multi-threaded runtime the reader task runs on.
///
/// # Errors
///
/// Returns an error if the runtime's threads cannot be started.
pub fn build_runtime() -> std::io::Result<Runtime> {
    Builder::new_multi_thread().enable_all().build()
}

/// Shuts down the reader runtime, waiting at most [`SHUTDOWN_GRACE`].
///
/// Tokio reads stdin on a blocking thread that cannot be cancelled; dropping
/// the runtime would wait until the producer writes again or closes the pipe.
pub fn shutdown_runtime(runtime: Runtime) {
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    debug!("Reader runtime shut down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LineType;
    use anyhow::Result;
    use tempfile::TempDir;

    /// Drains every event currently buffered in `rx`.
    fn drain(rx: &mut mpsc::Receiver<SourceEvent>) -> Vec<SourceEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    // =========================================================================
    // Record Parsing Tests
    // =========================================================================

    mod parse_record {
        use super::*;

        #[test]
        fn raw_text_becomes_plain() {
            assert_eq!(parse_record("hello world"), LogLine::plain("hello world"));
        }

        #[test]
        fn json_record_keeps_type() {
            let line = parse_record(r#"{"type":"success","text":"build ok"}"#);
            assert_eq!(line, LogLine::success("build ok"));
        }

        #[test]
        fn leading_whitespace_before_json_is_allowed() {
            let line = parse_record(r#"   {"type":"dim","text":"quiet"}"#);
            assert_eq!(line.line_type, LineType::Dim);
        }

        #[test]
        fn unknown_type_in_json_is_plain() {
            let line = parse_record(r#"{"type":"warning","text":"careful"}"#);
            assert_eq!(line, LogLine::plain("careful"));
        }

        /// Malformed JSON is shown verbatim rather than dropped.
        #[test]
        fn malformed_json_is_plain_raw_text() {
            let raw = r#"{"type":"error","text":"#;
            assert_eq!(parse_record(raw), LogLine::plain(raw));
        }

        #[test]
        fn non_string_type_is_plain_raw_text() {
            let raw = r#"{"type":3,"text":"x"}"#;
            assert_eq!(parse_record(raw), LogLine::plain(raw));
        }

        #[test]
        fn empty_line_is_plain_empty() {
            assert_eq!(parse_record(""), LogLine::plain(""));
        }
    }

    // =========================================================================
    // Streaming Tests
    // =========================================================================

    mod streaming {
        use super::*;

        #[tokio::test]
        async fn streams_lines_then_closes() {
            let input: &[u8] = b"first\n{\"type\":\"error\",\"text\":\"fail\"}\nlast\n";
            let (tx, mut rx) = mpsc::channel(16);

            stream_lines(input, tx).await;

            assert_eq!(
                drain(&mut rx),
                vec![
                    SourceEvent::Line(LogLine::plain("first")),
                    SourceEvent::Line(LogLine::error("fail")),
                    SourceEvent::Line(LogLine::plain("last")),
                    SourceEvent::Closed,
                ]
            );
        }

        #[tokio::test]
        async fn strips_crlf_line_endings() {
            let input: &[u8] = b"one\r\ntwo";
            let (tx, mut rx) = mpsc::channel(16);

            stream_lines(input, tx).await;

            assert_eq!(
                drain(&mut rx),
                vec![
                    SourceEvent::Line(LogLine::plain("one")),
                    SourceEvent::Line(LogLine::plain("two")),
                    SourceEvent::Closed,
                ]
            );
        }

        #[tokio::test]
        async fn empty_input_only_closes() {
            let input: &[u8] = b"";
            let (tx, mut rx) = mpsc::channel(4);

            stream_lines(input, tx).await;

            assert_eq!(drain(&mut rx), vec![SourceEvent::Closed]);
        }

        #[tokio::test]
        async fn stops_when_receiver_dropped() {
            let input: &[u8] = b"a\nb\nc\n";
            let (tx, rx) = mpsc::channel(4);
            drop(rx);

            // Must return instead of blocking on a closed channel.
            stream_lines(input, tx).await;
        }
    }

    // =========================================================================
    // Reader Task Tests
    // =========================================================================

    mod reader_task {
        use super::*;

        #[tokio::test]
        async fn reads_file_input() -> Result<()> {
            let dir = TempDir::new()?;
            let path = dir.path().join("build.log");
            std::fs::write(&path, "{\"type\":\"info\",\"text\":\"compiling\"}\ndone\n")?;

            let (tx, mut rx) = mpsc::channel(16);
            spawn_reader(Input::File(path), tx).await?;

            assert_eq!(
                drain(&mut rx),
                vec![
                    SourceEvent::Line(LogLine::info("compiling")),
                    SourceEvent::Line(LogLine::plain("done")),
                    SourceEvent::Closed,
                ]
            );
            Ok(())
        }

        #[tokio::test]
        async fn missing_file_reports_failure() -> Result<()> {
            let dir = TempDir::new()?;
            let path = dir.path().join("missing.log");

            let (tx, mut rx) = mpsc::channel(4);
            spawn_reader(Input::File(path.clone()), tx).await?;

            let events = drain(&mut rx);
            assert_eq!(events.len(), 1);
            match &events[0] {
                SourceEvent::Failed(message) => {
                    assert!(message.contains("failed to open"));
                    assert!(message.contains("missing.log"));
                }
                other => panic!("expected failure, got {other:?}"),
            }
            Ok(())
        }

        #[tokio::test]
        async fn open_file_error_carries_path() {
            let result = open_file(Path::new("/nonexistent/scrollback/input.log")).await;

            match result {
                Err(SourceError::Open { path, .. }) => {
                    assert_eq!(path, PathBuf::from("/nonexistent/scrollback/input.log"));
                }
                Ok(_) => panic!("expected open error"),
                Err(other) => panic!("expected open error, got {other:?}"),
            }
        }
    }

    // =========================================================================
    // Runtime Shutdown Tests
    // =========================================================================

    mod runtime_shutdown {
        use super::*;
        use std::time::Instant;

        /// A reader stuck in a blocking read must not hold up exit.
        #[test]
        fn shutdown_does_not_wait_for_blocked_reader() -> Result<()> {
            let runtime = build_runtime()?;
            let (started_tx, started_rx) = std::sync::mpsc::channel();
            runtime.spawn_blocking(move || {
                let _ = started_tx.send(());
                std::thread::sleep(Duration::from_secs(30));
            });
            started_rx.recv_timeout(Duration::from_secs(5))?;

            let start = Instant::now();
            shutdown_runtime(runtime);

            assert!(start.elapsed() < Duration::from_secs(5));
            Ok(())
        }

        #[test]
        fn reader_runs_on_built_runtime() -> Result<()> {
            let runtime = build_runtime()?;
            let (tx, mut rx) = mpsc::channel(4);

            let handle = {
                let _guard = runtime.enter();
                spawn_reader(Input::File(PathBuf::from("/nonexistent/scrollback.log")), tx)
            };
            runtime.block_on(handle)?;
            shutdown_runtime(runtime);

            assert!(matches!(drain(&mut rx).as_slice(), [SourceEvent::Failed(_)]));
            Ok(())
        }
    }

    // =========================================================================
    // Input Tests
    // =========================================================================

    mod input {
        use super::*;

        #[test]
        fn labels() {
            assert_eq!(Input::Stdin.label(), "stdin");
            assert_eq!(Input::File(PathBuf::from("out.log")).label(), "out.log");
        }

        #[test]
        fn interactive_stdin_error_explains_fix() {
            let message = SourceError::InteractiveStdin.to_string();
            assert!(message.contains("stdin is a terminal"));
            assert!(message.contains("pass a file path"));
        }
    }
}
