//! # Service Logger
//!
//! Leveled logging for service processes: colored severity markers on every
//! line, an exception-capture hook for error tracking, and webhook
//! notifications for warnings, errors and fatal exits.
//!
//! ## Features
//!
//! - **Synchronous**: every call finishes on the calling thread, webhook POST included
//! - **Failure isolated**: sink and webhook failures never reach the caller
//! - **Testable**: sink, HTTP transport and process exit are all replaceable
//!
//! ```
//! use service_logger::prelude::*;
//! use service_logger::{info, warn};
//!
//! let logger = Logger::builder("billing", "invoices")
//!     .appender(MemoryAppender::new())
//!     .build();
//!
//! info!(logger, "listening on port {}", 8080);
//! warn!(logger, "{} invoices pending", 12);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;
pub mod webhook;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        Appender, CaptureCallback, ContextualError, LogEntry, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, ProcessExit, Result, Severity, Terminator, FATAL_EXIT_CODE,
    };
    pub use crate::webhook::{HttpTransport, WebhookConfig, WebhookPayload, WebhookTransport};
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use core::{
    Appender, CaptureCallback, ContextualError, LogEntry, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, ProcessExit, Result, Severity, Terminator, FATAL_EXIT_CODE,
};
pub use webhook::{HttpTransport, WebhookConfig, WebhookPayload, WebhookTransport};
