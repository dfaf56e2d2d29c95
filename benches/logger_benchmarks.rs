//! Criterion benchmarks for sink_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sink_logger::prelude::*;
use std::io;
use std::sync::Arc;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("from_writer", |b| {
        b.iter(|| {
            let logger = Logger::from_writer(io::sink());
            black_box(logger)
        });
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .name("bench")
                .level(LogLevel::Debug)
                .writer(io::sink());
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder().level(LogLevel::Debug).writer(io::sink());

    group.bench_function("debug", |b| {
        b.iter(|| black_box(&logger).debug(&[&"Debug message"]));
    });

    group.bench_function("info_three_args", |b| {
        b.iter(|| {
            let id = black_box(42);
            logger.info(&[&"request", &id, &"done"])
        });
    });

    group.bench_function("warnf", |b| {
        b.iter(|| logger.warnf(format_args!("retry {} of {}", black_box(3), 5)));
    });

    group.bench_function("log", |b| {
        b.iter(|| black_box(&logger).log(&[&"plain line"]));
    });

    group.finish();
}

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder().level(LogLevel::Critical).writer(io::sink());

    group.bench_function("debug_below_threshold", |b| {
        b.iter(|| black_box(&logger).debug(&[&"never written"]));
    });

    group.bench_function("debugf_below_threshold", |b| {
        b.iter(|| logger.debugf(format_args!("never {}", black_box("rendered"))));
    });

    group.finish();
}

// ============================================================================
// Timestamp Benchmarks
// ============================================================================

fn bench_timestamps(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp");

    for (name, format) in [
        ("rfc3339_nano", TimestampFormat::Rfc3339Nano),
        ("unix_millis", TimestampFormat::UnixMillis),
        ("custom", TimestampFormat::custom("%d/%b/%Y:%H:%M:%S %z")),
    ] {
        group.bench_function(name, |b| b.iter(|| black_box(format.now())));
    }

    group.finish();
}

// ============================================================================
// Contention Benchmarks
// ============================================================================

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");
    group.throughput(Throughput::Elements(400));
    group.sample_size(20);

    let logger = Arc::new(Logger::from_writer(io::sink()));

    group.bench_function("4_threads_x_100", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.info(&[&t, &i]);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("bench thread panicked");
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_filtered,
    bench_timestamps,
    bench_contention
);
criterion_main!(benches);
