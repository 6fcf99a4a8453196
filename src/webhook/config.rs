//! Webhook configuration

use crate::core::Severity;
use serde::{Deserialize, Serialize};

/// Where webhook notifications go and which calls trigger them.
///
/// An empty (or blank) `url` disables delivery whatever the flags say.
///
/// Deserializes from the camelCase keys `url`, `sendError`, `sendFatal` and
/// `sendWarn`; missing keys fall back to the disabled defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConfig {
    pub url: String,
    pub send_error: bool,
    pub send_fatal: bool,
    pub send_warn: bool,
}

/// Logger calls that may forward to the webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookTrigger {
    Warn,
    Error,
    Fatal,
}

impl WebhookTrigger {
    /// Level reported in the payload
    pub fn severity(&self) -> Severity {
        match self {
            WebhookTrigger::Warn => Severity::Warn,
            WebhookTrigger::Error | WebhookTrigger::Fatal => Severity::Err,
        }
    }
}

impl WebhookConfig {
    /// Configuration pointing at `url` with every trigger off
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_send_error(mut self, enabled: bool) -> Self {
        self.send_error = enabled;
        self
    }

    #[must_use]
    pub fn with_send_fatal(mut self, enabled: bool) -> Self {
        self.send_fatal = enabled;
        self
    }

    #[must_use]
    pub fn with_send_warn(mut self, enabled: bool) -> Self {
        self.send_warn = enabled;
        self
    }

    /// Whether a URL is configured at all
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Flag gating `trigger`, ignoring the URL
    pub fn triggers_on(&self, trigger: WebhookTrigger) -> bool {
        match trigger {
            WebhookTrigger::Warn => self.send_warn,
            WebhookTrigger::Error => self.send_error,
            WebhookTrigger::Fatal => self.send_fatal,
        }
    }
}
