//! Logger metrics for observability
//!
//! Counters for lines written, suppressed debug lines, sink failures,
//! capture callback invocations and webhook outcomes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use service_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_webhook_failed();
///
/// assert_eq!(metrics.lines_emitted(), 1);
/// assert_eq!(metrics.webhook_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the appender successfully
    lines_emitted: AtomicU64,

    /// Debug calls dropped because debug output is off
    debug_suppressed: AtomicU64,

    /// Lines the appender failed to write
    sink_failures: AtomicU64,

    /// Capture callback invocations
    captures_invoked: AtomicU64,

    /// Webhook posts answered with 200
    webhooks_delivered: AtomicU64,

    /// Webhook attempts that failed to encode, send, or got a non-200 answer
    webhook_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_emitted: AtomicU64::new(0),
            debug_suppressed: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            captures_invoked: AtomicU64::new(0),
            webhooks_delivered: AtomicU64::new(0),
            webhook_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_emitted(&self) -> u64 {
        self.lines_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn debug_suppressed(&self) -> u64 {
        self.debug_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn captures_invoked(&self) -> u64 {
        self.captures_invoked.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn webhooks_delivered(&self) -> u64 {
        self.webhooks_delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn webhook_failures(&self) -> u64 {
        self.webhook_failures.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.lines_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_debug_suppressed(&self) -> u64 {
        self.debug_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_capture(&self) -> u64 {
        self.captures_invoked.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_webhook_delivered(&self) -> u64 {
        self.webhooks_delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_webhook_failed(&self) -> u64 {
        self.webhook_failures.fetch_add(1, Ordering::Relaxed)
    }

}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_emitted: AtomicU64::new(self.lines_emitted()),
            debug_suppressed: AtomicU64::new(self.debug_suppressed()),
            sink_failures: AtomicU64::new(self.sink_failures()),
            captures_invoked: AtomicU64::new(self.captures_invoked()),
            webhooks_delivered: AtomicU64::new(self.webhooks_delivered()),
            webhook_failures: AtomicU64::new(self.webhook_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.lines_emitted(), 0);
        assert_eq!(metrics.debug_suppressed(), 0);
        assert_eq!(metrics.sink_failures(), 0);
        assert_eq!(metrics.captures_invoked(), 0);
        assert_eq!(metrics.webhooks_delivered(), 0);
        assert_eq!(metrics.webhook_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_emitted(), 0);
        assert_eq!(metrics.record_emitted(), 1);
        assert_eq!(metrics.lines_emitted(), 2);
    }

    #[test]
    fn test_metrics_clone() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();

        let snapshot = metrics.clone();
        metrics.record_emitted();

        assert_eq!(metrics.lines_emitted(), 2);
        assert_eq!(snapshot.lines_emitted(), 1);
    }
}
