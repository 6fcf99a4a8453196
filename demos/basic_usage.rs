//! Basic logger usage example
//!
//! Demonstrates console logging at every severity and the debug switch.
//!
//! Run with: cargo run --example basic_usage

use service_logger::prelude::*;
use service_logger::{debug, error, info, warn};
use std::sync::Arc;

fn main() {
    println!("=== Service Logger - Basic Usage Example ===\n");

    let mut logger = Logger::new("demo-service", "basic-usage", false, WebhookConfig::default());

    println!("1. Logging at different severities (debug off):");
    info!(logger, "Listening on port {}", 8080);
    warn!(logger, "Cache warmup took {}ms", 1250);
    error!(logger, "Upstream {} returned {}", "inventory", 503);
    debug!(logger, "Hidden: debug output is off");

    println!("\n2. Enabling debug output:");
    logger.set_debug_enabled(true);
    debug!(logger, "Resolved {} routes", 42);

    println!("\n3. Capturing errors for an exception tracker:");
    logger.set_capture_exception(Some(Arc::new(|err: ContextualError| {
        println!("   captured -> {}", err);
    })));
    logger.error("Payment provider rejected the request");

    println!("\n=== Example completed successfully! ===");
}
