//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    contextual_error::{CaptureCallback, ContextualError},
    error::Result,
    log_entry::LogEntry,
    metrics::LoggerMetrics,
    severity::Severity,
    terminator::{ProcessExit, Terminator, FATAL_EXIT_CODE},
};
use crate::appenders::ConsoleAppender;
use crate::webhook::{
    Delivery, HttpTransport, WebhookConfig, WebhookNotifier, WebhookTransport, WebhookTrigger,
};
use colored::Colorize;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Leveled logger for one service or subsystem.
///
/// Every call runs to completion on the calling thread: the line is written,
/// and for `warn`/`error`/`fatal` the webhook POST (if configured) is made
/// before the method returns. No logging method reports an error.
///
/// The logger is `Send + Sync`, so it can be shared through `Arc` and used
/// from many threads at once. The sink lock makes each line atomic.
pub struct Logger {
    service_name: String,
    context_name: String,
    debug_enabled: bool,
    use_colors: bool,
    service_marker: String,
    capture_exception: Option<CaptureCallback>,
    webhook: WebhookNotifier,
    appender: Mutex<Box<dyn Appender>>,
    terminator: Arc<dyn Terminator>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger writing to stderr with the default HTTP transport
    #[must_use]
    pub fn new(
        service_name: impl Into<String>,
        context_name: impl Into<String>,
        debug_enabled: bool,
        webhook: WebhookConfig,
    ) -> Self {
        Self::builder(service_name, context_name)
            .debug_enabled(debug_enabled)
            .webhook(webhook)
            .build()
    }

    /// Logger from an already parsed config; `LoggerConfig::validate` is not re-run
    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self::builder(config.service_name, config.context_name)
            .debug_enabled(config.debug_enabled)
            .webhook(config.webhook)
            .build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use service_logger::prelude::*;
    ///
    /// let logger = Logger::builder("billing", "invoices")
    ///     .debug_enabled(true)
    ///     .appender(MemoryAppender::new())
    ///     .build();
    ///
    /// logger.debug("visible because debug output is on");
    /// ```
    #[must_use]
    pub fn builder(service_name: impl Into<String>, context_name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(service_name, context_name)
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn context_name(&self) -> &str {
        &self.context_name
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn webhook_config(&self) -> &WebhookConfig {
        self.webhook.config()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Turn debug output on or off.
    ///
    /// Takes `&mut self`: a logger shared across threads needs an outer lock
    /// (e.g. `RwLock<Logger>`) to be toggled; the logger does not synchronize
    /// this flag on its own.
    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.debug_enabled = enabled;
    }

    /// Register or clear the exception-capture callback.
    ///
    /// Same synchronization rule as [`Logger::set_debug_enabled`].
    pub fn set_capture_exception(&mut self, callback: Option<CaptureCallback>) {
        self.capture_exception = callback;
    }

    /// Core emit routine: render one line and write it to the appender.
    ///
    /// Debug lines are dropped without rendering `message` while debug
    /// output is off. Sink failures are reported on stderr and swallowed.
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        if severity == Severity::Debug && !self.debug_enabled {
            self.metrics.record_debug_suppressed();
            return;
        }

        self.write_line(severity, &message.to_string());
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    /// Log at WARN, then notify the webhook when `send_warn` is set
    pub fn warn(&self, message: impl fmt::Display) {
        let message = message.to_string();
        self.write_line(Severity::Warn, &message);
        self.notify(WebhookTrigger::Warn, &message);
    }

    /// Capture, log at ERR, then notify the webhook when `send_error` is set
    pub fn error(&self, message: impl fmt::Display) {
        let message = message.to_string();
        self.capture(&message);
        self.write_line(Severity::Err, &message);
        self.notify(WebhookTrigger::Error, &message);
    }

    /// Same sequence as [`Logger::error`] gated by `send_fatal`, then exit with
    /// status 1.
    ///
    /// The webhook POST completes before the process ends, so a slow endpoint
    /// delays the exit. The appender is flushed first because exiting skips
    /// destructors.
    pub fn fatal(&self, message: impl fmt::Display) {
        let message = message.to_string();
        self.capture(&message);
        self.write_line(Severity::Err, &message);
        self.notify(WebhookTrigger::Fatal, &message);

        if let Err(e) = self.flush() {
            let _ = writeln!(std::io::stderr(), "[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        self.terminator.terminate(FATAL_EXIT_CODE);
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    fn capture(&self, message: &str) {
        if let Some(ref callback) = self.capture_exception {
            self.metrics.record_capture();
            callback(ContextualError::new(self.context_name.as_str(), message));
        }
    }

    fn write_line(&self, severity: Severity, message: &str) {
        let entry = LogEntry::new(
            severity,
            &self.service_marker,
            &severity.marker(self.use_colors),
            message,
        );

        let mut appender = self.appender.lock();
        match appender.append(&entry) {
            Ok(()) => {
                self.metrics.record_emitted();
            }
            Err(e) => {
                self.metrics.record_sink_failure();
                let _ = writeln!(
                    std::io::stderr(),
                    "[LOGGER ERROR] Appender '{}' failed: {}",
                    appender.name(),
                    e
                );
            }
        }
    }

    /// Webhook failures are printed at ERR and never notified themselves
    fn notify(&self, trigger: WebhookTrigger, message: &str) {
        if !self.webhook.should_send(trigger) {
            return;
        }

        match self
            .webhook
            .send(&self.service_name, &self.context_name, trigger.severity(), message)
        {
            Ok(Delivery::Delivered) => {
                self.metrics.record_webhook_delivered();
            }
            Ok(Delivery::Skipped) => {}
            Err(e) => {
                self.metrics.record_webhook_failed();
                self.write_line(Severity::Err, &e.to_string());
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("service_name", &self.service_name)
            .field("context_name", &self.context_name)
            .field("debug_enabled", &self.debug_enabled)
            .field("capture_exception", &self.capture_exception.is_some())
            .field("webhook", &self.webhook)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use service_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder("billing", "invoices")
///     .webhook(WebhookConfig::new("https://hooks.example.com/alerts").with_send_error(true))
///     .appender(ConsoleAppender::new())
///     .colors(false)
///     .capture_exception(Arc::new(|err: ContextualError| {
///         eprintln!("reporting: {}", err);
///     }))
///     .build();
/// ```
pub struct LoggerBuilder {
    service_name: String,
    context_name: String,
    debug_enabled: bool,
    use_colors: bool,
    webhook: WebhookConfig,
    appender: Option<Box<dyn Appender>>,
    transport: Option<Arc<dyn WebhookTransport>>,
    terminator: Option<Arc<dyn Terminator>>,
    capture_exception: Option<CaptureCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(service_name: impl Into<String>, context_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            context_name: context_name.into(),
            debug_enabled: false,
            use_colors: true,
            webhook: WebhookConfig::default(),
            appender: None,
            transport: None,
            terminator: None,
            capture_exception: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug_enabled(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Decorate markers with ANSI colors (default: on)
    ///
    /// `colored` decides whether styles are emitted from stdout's terminal
    /// status and `NO_COLOR`/`CLICOLOR_FORCE`, not from the appender's stream.
    /// With stdout redirected, stderr lines stay uncolored unless
    /// `CLICOLOR_FORCE=1` is set.
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn webhook(mut self, config: WebhookConfig) -> Self {
        self.webhook = config;
        self
    }

    /// Output sink; defaults to [`ConsoleAppender`]
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Webhook transport; defaults to [`HttpTransport`]
    #[must_use = "builder methods return a new value"]
    pub fn transport(mut self, transport: Arc<dyn WebhookTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// What `fatal` calls to end the process; defaults to [`ProcessExit`]
    #[must_use = "builder methods return a new value"]
    pub fn terminator(mut self, terminator: Arc<dyn Terminator>) -> Self {
        self.terminator = Some(terminator);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn capture_exception(mut self, callback: CaptureCallback) -> Self {
        self.capture_exception = Some(callback);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let tag = format!("[{}]", self.service_name);
        let service_marker = if self.use_colors {
            tag.magenta().to_string()
        } else {
            tag
        };

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(HttpTransport::new()));

        Logger {
            service_name: self.service_name,
            context_name: self.context_name,
            debug_enabled: self.debug_enabled,
            use_colors: self.use_colors,
            service_marker,
            capture_exception: self.capture_exception,
            webhook: WebhookNotifier::new(self.webhook, transport),
            appender: Mutex::new(
                self.appender
                    .unwrap_or_else(|| Box::new(ConsoleAppender::new())),
            ),
            terminator: self.terminator.unwrap_or_else(|| Arc::new(ProcessExit)),
            metrics: LoggerMetrics::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::LoggerError;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticTransport {
        status: StatusCode,
        calls: AtomicUsize,
    }

    impl WebhookTransport for StaticTransport {
        fn post_json(&self, _url: &str, _body: Vec<u8>) -> Result<StatusCode> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.status)
        }
    }

    struct NoExit {
        codes: Mutex<Vec<i32>>,
    }

    impl Terminator for NoExit {
        fn terminate(&self, code: i32) {
            self.codes.lock().push(code);
        }
    }

    fn plain_logger(memory: &MemoryAppender) -> LoggerBuilder {
        Logger::builder("svc", "ctx")
            .colors(false)
            .appender(memory.clone())
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder("svc", "ctx").build();
        assert_eq!(logger.service_name(), "svc");
        assert_eq!(logger.context_name(), "ctx");
        assert!(!logger.debug_enabled());
        assert!(!logger.webhook_config().is_enabled());
    }

    #[test]
    fn test_from_config() {
        let config = LoggerConfig {
            debug_enabled: true,
            ..LoggerConfig::new("api", "http")
        };
        let logger = Logger::from_config(config);

        assert_eq!(logger.service_name(), "api");
        assert!(logger.debug_enabled());
    }

    #[test]
    fn test_plain_line_layout() {
        let memory = MemoryAppender::new();
        let logger = plain_logger(&memory).build();

        logger.info(format_args!("hello {}", "world"));
        assert_eq!(memory.lines(), vec!["[svc] [INFO] hello world".to_string()]);
    }

    #[test]
    fn test_debug_toggle() {
        let memory = MemoryAppender::new();
        let mut logger = plain_logger(&memory).build();

        logger.debug("hidden");
        assert!(memory.is_empty());
        assert_eq!(logger.metrics().debug_suppressed(), 1);

        logger.set_debug_enabled(true);
        logger.debug("shown");
        assert_eq!(memory.lines(), vec!["[svc] [DEBUG] shown".to_string()]);
    }

    #[test]
    fn test_debug_message_not_rendered_when_disabled() {
        struct Counting<'a>(&'a AtomicUsize);

        impl fmt::Display for Counting<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fetch_add(1, Ordering::SeqCst);
                write!(f, "rendered")
            }
        }

        let renders = AtomicUsize::new(0);
        let memory = MemoryAppender::new();
        let logger = plain_logger(&memory).build();

        logger.debug(Counting(&renders));
        assert_eq!(renders.load(Ordering::SeqCst), 0);

        logger.info(Counting(&renders));
        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fatal_uses_err_marker_and_exit_code() {
        let memory = MemoryAppender::new();
        let terminator = Arc::new(NoExit {
            codes: Mutex::new(Vec::new()),
        });
        let logger = plain_logger(&memory).terminator(terminator.clone()).build();

        logger.fatal("cannot bind :8080");

        assert_eq!(memory.lines(), vec!["[svc] [ERR] cannot bind :8080".to_string()]);
        assert_eq!(*terminator.codes.lock(), vec![FATAL_EXIT_CODE]);
    }

    #[test]
    fn test_non_200_reported_once() {
        let memory = MemoryAppender::new();
        let transport = Arc::new(StaticTransport {
            status: StatusCode::BAD_GATEWAY,
            calls: AtomicUsize::new(0),
        });
        let logger = plain_logger(&memory)
            .webhook(WebhookConfig::new("http://hooks.local").with_send_warn(true))
            .transport(transport.clone())
            .build();

        logger.warn("queue depth 10k");

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            memory.lines(),
            vec![
                "[svc] [WARN] queue depth 10k".to_string(),
                "[svc] [ERR] Webhook responded with status: 502 Bad Gateway".to_string(),
            ]
        );
        assert_eq!(logger.metrics().webhook_failures(), 1);
        assert_eq!(logger.metrics().webhooks_delivered(), 0);
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        struct Broken;

        impl Appender for Broken {
            fn append(&mut self, _entry: &LogEntry) -> Result<()> {
                Err(LoggerError::writer("disk full"))
            }

            fn flush(&mut self) -> Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "broken"
            }
        }

        let logger = Logger::builder("svc", "ctx").appender(Broken).build();
        logger.info("lost");
        logger.error("also lost");

        assert_eq!(logger.metrics().sink_failures(), 2);
        assert_eq!(logger.metrics().lines_emitted(), 0);
    }

    #[test]
    fn test_capture_can_be_replaced() {
        let memory = MemoryAppender::new();
        let mut logger = plain_logger(&memory).build();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        logger.set_capture_exception(Some(Arc::new(move |err: ContextualError| {
            sink.lock().push(err.to_string());
        })));
        logger.error("first");

        logger.set_capture_exception(None);
        logger.error("second");

        assert_eq!(*seen.lock(), vec!["{ctx} => first".to_string()]);
        assert_eq!(logger.metrics().captures_invoked(), 1);
    }
}
