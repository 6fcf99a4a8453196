//! Console appender implementation

use crate::core::{Appender, LogEntry, Result};
use std::io::Write;

/// Default `strftime` layout of the line prefix, e.g. `2024/05/01 13:07:42`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Writes every line to stderr, one `write` per line.
pub struct ConsoleAppender {
    timestamp_format: Option<String>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            timestamp_format: Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
        }
    }

    /// Drop the timestamp prefix, e.g. when a supervisor adds its own
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    ///
    /// # Examples
    ///
    /// ```
    /// use service_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_custom_timestamp("%d/%b/%Y:%H:%M:%S %z");
    /// ```
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = Some(format_str.to_string());
        self
    }

    fn format_line(&self, entry: &LogEntry) -> String {
        match self.timestamp_format {
            Some(ref format) => format!("{} {}\n", entry.timestamp.format(format), entry.line),
            None => format!("{}\n", entry.line),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format_line(entry);
        std::io::stderr().lock().write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
