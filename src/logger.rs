//! Structured logging with box-drawing output.
//!
//! Every line the CLI prints goes through this module so the output keeps a
//! consistent visual shape:
//!
//! ```text
//! ┏ offset v0.3.0 ━━╸
//! ┃
//! ┣ World clock at 09:05 CEST (Europe/Madrid)
//! ┃
//! ┣ ☀ Tokyo, Japan
//! ┃   16:05:12  Tue, 4 Jun  +7h    business  Asia/Tokyo
//! ╹
//! ```
//!
//! ## Conventions
//!
//! - **`log_block_start!`** opens a new conceptual block. It prints an empty
//!   pipe for spacing, then `┣ message`.
//! - **`log_decorated!`** continues a block with `┣ message`.
//! - **`log_indented!`** prints nested detail lines as `┃   message`.
//! - **`log_pipe!`** inserts a single `┃` spacer, typically before a semantic
//!   level message that starts its own block.
//! - **`log_version!`** / **`log_end!`** frame the whole run.
//! - **`log_info!`, `log_warning!`, `log_error!`, `log_debug!`,
//!   `log_critical!`** carry a coloured `[LEVEL]` tag. `log_debug!` lines are
//!   only emitted when debug output was switched on with [`Log::set_debug`].
//!
//! When the global time source is shifted (time travel) or pinned to a fixed
//! instant, every line is prefixed with the UTC time being displayed so
//! output from different runs can be told apart.

use std::io::Write;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Sender, channel};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

// Set when --log routes output into a file
static LOG_CHANNEL: OnceLock<Sender<LogMessage>> = OnceLock::new();

enum LogMessage {
    Formatted(String),
    Shutdown,
}

/// Shape of a single emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Block,
    Decorated,
    Indented,
    Info,
    Warning,
    WarningStandalone,
    Error,
    ErrorExit,
    Debug,
    Critical,
}

/// Main logging interface.
pub struct Log;

impl Log {
    /// Enable or disable all output.
    ///
    /// Tests switch logging off so fallback warnings do not clutter the
    /// harness output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Enable `log_debug!` output.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_debug() -> bool {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }

    /// Start writing all output to `file_path` instead of stdout.
    ///
    /// Output is handed to a writer thread; the returned guard flushes and
    /// joins it when dropped.
    pub fn start_file_logging(file_path: String) -> anyhow::Result<LoggerGuard> {
        let (tx, rx) = channel();

        LOG_CHANNEL
            .set(tx.clone())
            .map_err(|_| anyhow::anyhow!("Logger channel already initialized"))?;

        let handle = std::thread::spawn(move || {
            let mut file = std::fs::File::create(&file_path)?;

            loop {
                match rx.recv() {
                    Ok(LogMessage::Formatted(text)) => {
                        file.write_all(text.as_bytes())?;
                    }
                    Ok(LogMessage::Shutdown) | Err(_) => {
                        file.flush()?;
                        break;
                    }
                }
            }

            Ok::<(), anyhow::Error>(())
        });

        Ok(LoggerGuard {
            tx,
            handle: Some(handle),
        })
    }

    /// Timestamp prefix shown while the displayed instant differs from the
    /// real clock. Empty otherwise.
    pub fn get_timestamp_prefix() -> String {
        if crate::time_source::is_initialized() && crate::time_source::is_shifted() {
            let displayed = crate::time_source::now();
            format!("[{}Z] ", displayed.format("%H:%M:%S"))
        } else {
            String::new()
        }
    }
}

/// Guard for file logging that ensures clean shutdown.
pub struct LoggerGuard {
    tx: Sender<LogMessage>,
    handle: Option<std::thread::JoinHandle<anyhow::Result<()>>>,
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(LogMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Remove `ESC [ ... m` colour sequences.
pub(crate) fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch == 'm' {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Lay out one message according to its line shape.
pub(crate) fn format_line(prefix: &str, line: Line, message: &str) -> String {
    match line {
        Line::Block => format!("{prefix}┃\n{prefix}┣ {message}\n"),
        Line::Decorated => format!("{prefix}┣ {message}\n"),
        Line::Indented => format!("{prefix}┃   {message}\n"),
        Line::Info => format!("{prefix}┣[\x1b[32mINFO\x1b[0m] {message}\n"),
        Line::Warning => format!("{prefix}┣[\x1b[33mWARNING\x1b[0m] {message}\n"),
        Line::WarningStandalone => format!("{prefix}[\x1b[33mWARNING\x1b[0m] {message}\n"),
        Line::Error => format!("{prefix}┣[\x1b[31mERROR\x1b[0m] {message}\n"),
        Line::ErrorExit => format!("{prefix}┃\n{prefix}┗[\x1b[31mERROR\x1b[0m] {message}\n"),
        Line::Debug => format!("{prefix}┣[\x1b[36mDEBUG\x1b[0m] {message}\n"),
        Line::Critical => format!("{prefix}┣[\x1b[31mCRITICAL\x1b[0m] {message}\n"),
    }
}

/// Route text to the log file when file logging is active, stdout otherwise.
pub fn write_output(text: &str) {
    if let Some(tx) = LOG_CHANNEL.get() {
        let _ = tx.send(LogMessage::Formatted(strip_ansi_codes(text)));
    } else {
        print!("{text}");
        let _ = std::io::stdout().flush();
    }
}

/// Format and write a message (needed by the macros).
pub fn emit(line: Line, message: &str) {
    if !Log::is_enabled() || (line == Line::Debug && !Log::is_debug()) {
        return;
    }
    let prefix = Log::get_timestamp_prefix();
    write_output(&format_line(&prefix, line, message));
}

/// Write a line that takes no message (pipe, header, terminator).
pub fn emit_raw(text: &str) {
    if Log::is_enabled() {
        let prefix = Log::get_timestamp_prefix();
        write_output(&format!("{prefix}{text}\n"));
    }
}

// # Logging Macros

/// Log a block start message, opening a new conceptual block.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::Block, &format!($($arg)+))
    };
}

/// Log a decorated message as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::Decorated, &format!($($arg)+))
    };
}

/// Log an indented detail line.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::Indented, &format!($($arg)+))
    };
}

/// Log a visual pipe separator.
#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::logger::emit_raw("┃")
    };
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::logger::emit_raw(&format!("┏ offset v{} ━━╸", env!("CARGO_PKG_VERSION")))
    };
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {
        $crate::logger::emit_raw("╹")
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::Info, &format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::Warning, &format!($($arg)+))
    };
}

/// Log a warning without the pipe prefix, for output outside a block.
#[macro_export]
macro_rules! log_warning_standalone {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::WarningStandalone, &format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::Error, &format!($($arg)+))
    };
}

/// Log an error that terminates the run, closing the pipe with `┗`.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::ErrorExit, &format!($($arg)+))
    };
}

/// Log a debug message (suppressed unless debug output is enabled).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::Debug, &format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)+) => {
        $crate::logger::emit($crate::logger::Line::Critical, &format!($($arg)+))
    };
}
