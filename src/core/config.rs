//! Serializable logger configuration

use super::error::{LoggerError, Result};
use crate::webhook::WebhookConfig;
use serde::{Deserialize, Serialize};

/// Plain configuration record for building a [`Logger`](super::Logger).
///
/// ```
/// use service_logger::LoggerConfig;
///
/// let config = LoggerConfig::from_json(
///     r#"{
///         "serviceName": "billing",
///         "contextName": "invoices",
///         "webhook": { "url": "https://hooks.example.com/alerts", "sendError": true }
///     }"#,
/// ).unwrap();
///
/// assert_eq!(config.service_name, "billing");
/// assert!(config.webhook.send_error);
/// assert!(!config.debug_enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    pub service_name: String,
    #[serde(default)]
    pub context_name: String,
    #[serde(default)]
    pub debug_enabled: bool,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl LoggerConfig {
    pub fn new(service_name: impl Into<String>, context_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            context_name: context_name.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Require a service name and, when a webhook URL is set, an http(s) one
    pub fn validate(&self) -> Result<()> {
        if self.service_name.trim().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "serviceName is empty"));
        }

        if self.webhook.is_enabled() {
            let url = self.webhook.url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(LoggerError::config(
                    "WebhookConfig",
                    format!("url '{}' is not an http(s) URL", url),
                ));
            }
        }

        Ok(())
    }
}
