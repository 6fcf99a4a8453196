//! JSON body posted to the webhook

use crate::core::{LoggerError, Result, Severity};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One notification, built per delivery attempt and dropped after the POST
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub service_name: String,
    pub log_context_name: String,
    pub message: String,
    pub level: Severity,
    /// RFC 3339, taken when the payload is built
    pub timestamp: String,
}

impl WebhookPayload {
    pub fn new(
        service_name: impl Into<String>,
        log_context_name: impl Into<String>,
        level: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            log_context_name: log_context_name.into(),
            message: message.into(),
            level,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(LoggerError::WebhookEncode)
    }
}
