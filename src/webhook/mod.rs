//! Webhook notifications for selected log calls
//!
//! Delivery is a single best-effort POST: no retry, no backoff, no queue.
//! Failures come back as [`LoggerError`] values for the logger to print.

pub mod config;
pub mod payload;
pub mod transport;

pub use config::{WebhookConfig, WebhookTrigger};
pub use payload::WebhookPayload;
pub use transport::{HttpTransport, WebhookTransport};

use crate::core::{LoggerError, Result, Severity};
use reqwest::StatusCode;
use std::sync::Arc;

/// Outcome of a successful [`WebhookNotifier::send`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// No URL configured, nothing was sent
    Skipped,
    /// Endpoint answered 200
    Delivered,
}

/// Pairs a [`WebhookConfig`] with the transport that carries its payloads
pub struct WebhookNotifier {
    config: WebhookConfig,
    transport: Arc<dyn WebhookTransport>,
}

impl WebhookNotifier {
    pub fn new(config: WebhookConfig, transport: Arc<dyn WebhookTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Whether a call of kind `trigger` would reach the network
    pub fn should_send(&self, trigger: WebhookTrigger) -> bool {
        self.config.is_enabled() && self.config.triggers_on(trigger)
    }

    /// Build a payload stamped with the current time and post it once.
    pub fn send(
        &self,
        service_name: &str,
        context_name: &str,
        level: Severity,
        message: &str,
    ) -> Result<Delivery> {
        if !self.config.is_enabled() {
            return Ok(Delivery::Skipped);
        }

        let payload = WebhookPayload::new(service_name, context_name, level, message);
        let body = payload.to_json()?;

        let status = self.transport.post_json(&self.config.url, body)?;
        if status != StatusCode::OK {
            return Err(LoggerError::WebhookStatus { status });
        }

        Ok(Delivery::Delivered)
    }
}

impl std::fmt::Debug for WebhookNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookNotifier")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
