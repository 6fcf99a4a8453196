//! HTTP transport for webhook delivery

use crate::core::{LoggerError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::any::Any;
use std::thread;
use std::time::Duration;

/// Performs the single POST of a webhook attempt.
///
/// Implementations return the response status; the body must be discarded.
/// Any failure to obtain a response is an error.
pub trait WebhookTransport: Send + Sync {
    fn post_json(&self, url: &str, body: Vec<u8>) -> Result<StatusCode>;
}

/// Blocking `reqwest` transport.
///
/// Each POST runs on a short-lived scoped worker thread that builds, uses and
/// drops its own client, and the caller waits for it. The blocking client
/// never lives on the caller's thread, so logging from inside an async
/// runtime is safe. A panic on the worker is reported as
/// [`LoggerError::WebhookSend`].
#[derive(Debug, Default, Clone)]
pub struct HttpTransport {
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Transport with reqwest's default request timeout
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Bound every POST by `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn post_on_worker(&self, url: &str, body: Vec<u8>) -> Result<StatusCode> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LoggerError::webhook_send)?;

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(LoggerError::webhook_send)?;

        Ok(response.status())
    }
}

impl WebhookTransport for HttpTransport {
    fn post_json(&self, url: &str, body: Vec<u8>) -> Result<StatusCode> {
        thread::scope(|scope| {
            let worker = thread::Builder::new()
                .name("webhook-post".to_string())
                .spawn_scoped(scope, move || self.post_on_worker(url, body))
                .map_err(LoggerError::webhook_send)?;

            worker
                .join()
                .unwrap_or_else(|panic| Err(LoggerError::webhook_send(panic_message(panic))))
        })
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("worker panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("worker panicked: {}", msg)
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    /// URL on a port that was free a moment ago, so nothing answers there
    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);
        format!("http://127.0.0.1:{}/hook", port)
    }

    #[test]
    fn test_unreachable_endpoint_is_error() {
        let transport = HttpTransport::new();
        let result = transport.post_json(&closed_port_url(), b"{}".to_vec());

        match result {
            Err(err) => assert!(matches!(err, LoggerError::WebhookSend(_))),
            Ok(status) => panic!("expected transport failure, got {}", status),
        }
    }

    #[test]
    fn test_invalid_url_is_error() {
        let transport = HttpTransport::new();
        assert!(transport.post_json("not a url", b"{}".to_vec()).is_err());
    }

    #[test]
    fn test_timeout_is_kept() {
        assert_eq!(HttpTransport::new().timeout(), None);

        let transport = HttpTransport::with_timeout(Duration::from_secs(2));
        assert_eq!(transport.timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_panic_payload_becomes_message() {
        let err = LoggerError::webhook_send(panic_message(Box::new("client exploded")));
        assert_eq!(
            err.to_string(),
            "Failed to send webhook: worker panicked: client exploded"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_post_from_async_context_returns_error() {
        let transport = HttpTransport::new();
        let result = transport.post_json(&closed_port_url(), b"{}".to_vec());

        assert!(matches!(result, Err(LoggerError::WebhookSend(_))));
    }

    #[tokio::test]
    async fn test_post_from_current_thread_runtime_returns_error() {
        let transport = HttpTransport::with_timeout(Duration::from_secs(5));
        let result = transport.post_json(&closed_port_url(), b"{}".to_vec());

        assert!(matches!(result, Err(LoggerError::WebhookSend(_))));
    }
}
