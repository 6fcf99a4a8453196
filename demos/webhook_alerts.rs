//! Webhook alert example
//!
//! Loads the logger configuration from JSON and forwards warnings and errors
//! to the configured endpoint. Point `url` at any HTTP receiver (for example
//! a local `nc -l 8099`) to see the payloads; with nothing listening, the
//! delivery failure is logged instead.
//!
//! Run with: cargo run --example webhook_alerts

use service_logger::prelude::*;

const CONFIG: &str = r#"{
    "serviceName": "demo-service",
    "contextName": "webhook-alerts",
    "debugEnabled": true,
    "webhook": {
        "url": "http://127.0.0.1:8099/alerts",
        "sendWarn": true,
        "sendError": true,
        "sendFatal": false
    }
}"#;

fn main() -> Result<()> {
    let config = LoggerConfig::from_json(CONFIG)?;
    let logger = Logger::from_config(config);

    logger.info("Starting up; info lines are never forwarded");
    logger.warn("Disk usage at 91%");
    logger.error(format_args!("Job {} failed after {} attempts", "nightly-export", 3));

    let metrics = logger.metrics();
    println!(
        "\nwebhooks delivered: {}, failed: {}",
        metrics.webhooks_delivered(),
        metrics.webhook_failures()
    );

    Ok(())
}
