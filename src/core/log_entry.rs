//! Log entry structure

use super::severity::Severity;
use chrono::{DateTime, Local};

/// One rendered line on its way to an appender
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: Severity,
    pub timestamp: DateTime<Local>,
    /// `<service marker> <severity marker> <message>`, ready to print
    pub line: String,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one call always produces one line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, service_marker: &str, severity_marker: &str, message: &str) -> Self {
        Self {
            severity,
            timestamp: Local::now(),
            line: format!(
                "{} {} {}",
                service_marker,
                severity_marker,
                Self::sanitize_message(message)
            ),
        }
    }
}
