//! Error types for the logger system

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Boxed error produced by a webhook transport
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error while reading configuration
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Webhook payload could not be encoded
    #[error("Failed to marshal webhook payload: {0}")]
    WebhookEncode(#[source] serde_json::Error),

    /// Webhook request never produced a response
    #[error("Failed to send webhook: {0}")]
    WebhookSend(#[source] TransportError),

    /// Webhook endpoint answered with something other than 200
    #[error("Webhook responded with status: {status}")]
    WebhookStatus { status: StatusCode },
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a webhook send error from any transport failure
    pub fn webhook_send<E>(err: E) -> Self
    where
        E: Into<TransportError>,
    {
        LoggerError::WebhookSend(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("WebhookConfig", "url is not absolute");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::writer("sink closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("LoggerConfig", "serviceName is empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: serviceName is empty"
        );

        let err = LoggerError::WebhookStatus {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Webhook responded with status: 404 Not Found");
    }

    #[test]
    fn test_webhook_send_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = LoggerError::webhook_send(io_err);

        assert!(matches!(err, LoggerError::WebhookSend(_)));
        assert_eq!(err.to_string(), "Failed to send webhook: connection refused");
    }
}
