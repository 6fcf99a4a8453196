//! Logging macros for ergonomic log message formatting.
//!
//! The macros take a `format!`-style template and arguments and hand the
//! logger a lazily rendered [`std::fmt::Arguments`]. Template and argument
//! mismatches are compile errors, and a suppressed debug call never renders
//! its arguments.
//!
//! # Examples
//!
//! ```
//! use service_logger::prelude::*;
//! use service_logger::info;
//!
//! let logger = Logger::builder("api", "startup").appender(MemoryAppender::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity through the core emit routine.
///
/// No capture callback or webhook is involved; use the per-severity macros
/// for that.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder("api", "ctx").appender(MemoryAppender::new()).build();
/// use service_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Err, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format_args!($($arg)+))
    };
}

/// Log a debug message; nothing is rendered while debug output is off.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder("api", "ctx").appender(MemoryAppender::new()).build();
/// use service_logger::debug;
/// debug!(logger, "Cache miss for key {}", "user:42");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log an info message.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder("api", "ctx").appender(MemoryAppender::new()).build();
/// use service_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log a warning, forwarding it to the webhook when `send_warn` is set.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder("api", "ctx").appender(MemoryAppender::new()).build();
/// use service_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log an error: capture callback, line, then webhook when `send_error` is set.
///
/// # Examples
///
/// ```
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder("api", "ctx").appender(MemoryAppender::new()).build();
/// use service_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

/// Log a fatal error and exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use service_logger::prelude::*;
/// # let logger = Logger::builder("api", "ctx").build();
/// use service_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}
