//! Log sink abstraction and the timestamped writer implementation.

use std::io::{self, Write};

use chrono::{DateTime, Local};

/// Timestamp pattern for log-line prefixes (24-hour local time).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A capability for emitting log lines.
///
/// The demo run receives a sink rather than using process-wide logger
/// state; tests capture what was logged through it.
pub trait LogSink {
    /// Writes one log line.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying writer fails.
    fn log(&mut self, message: &str) -> io::Result<()>;
}

/// Log sink that prefixes each message with the current local time.
///
/// Lines have the shape `[YYYY-MM-DD HH:MM:SS] <message>`.
pub struct TimestampSink<W> {
    out: W,
}

impl<W: Write> TimestampSink<W> {
    /// Wraps a writer in a timestamping sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> LogSink for TimestampSink<W> {
    fn log(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "[{}] {message}", format_timestamp(Local::now()))
    }
}

fn format_timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}
