//! Criterion benchmarks for service_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use service_logger::prelude::*;

/// Appender that discards everything, so only formatting is measured
struct NullAppender;

impl Appender for NullAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        black_box(&entry.line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(debug_enabled: bool, colors: bool) -> Logger {
    Logger::builder("bench-service", "bench")
        .debug_enabled(debug_enabled)
        .colors(colors)
        .appender(NullAppender)
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| black_box(null_logger(false, true)));
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let colored = null_logger(false, true);
    let plain = null_logger(false, false);

    group.bench_function("info_colored", |b| {
        b.iter(|| colored.info(black_box("request handled")));
    });

    group.bench_function("info_plain", |b| {
        b.iter(|| plain.info(black_box("request handled")));
    });

    group.bench_function("info_formatted", |b| {
        b.iter(|| plain.info(format_args!("status={} path={}", black_box(200), black_box("/orders"))));
    });

    group.bench_function("debug_suppressed", |b| {
        b.iter(|| plain.debug(format_args!("cache key {}", black_box("user:42"))));
    });

    group.bench_function("error_no_webhook", |b| {
        b.iter(|| plain.error(black_box("upstream timeout")));
    });

    group.finish();
}

// ============================================================================
// Webhook Payload Benchmarks
// ============================================================================

fn bench_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("webhook_payload");
    group.throughput(Throughput::Elements(1));

    group.bench_function("build_and_encode", |b| {
        b.iter(|| {
            let payload = WebhookPayload::new(
                black_box("bench-service"),
                black_box("bench"),
                Severity::Err,
                black_box("upstream timeout after 30s"),
            );
            black_box(payload.to_json())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_logger_creation, bench_emit, bench_payload);
criterion_main!(benches);
