//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod contextual_error;
pub mod error;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod terminator;

pub use appender::Appender;
pub use config::LoggerConfig;
pub use contextual_error::{CaptureCallback, ContextualError};
pub use error::{LoggerError, Result, TransportError};
pub use log_entry::LogEntry;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use terminator::{ProcessExit, Terminator, FATAL_EXIT_CODE};
