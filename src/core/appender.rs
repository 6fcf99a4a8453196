//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// Line-oriented output sink.
///
/// The logger calls `append` once per emitted line and swallows any error it
/// returns, so implementations only need to report failures, not recover.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
