//! Basic logger usage example
//!
//! Demonstrates console logging at each level and threshold filtering.
//!
//! Run with: cargo run --example basic_usage

use sink_logger::prelude::*;
use sink_logger::{critical, info, log, warn};

fn main() -> Result<()> {
    println!("=== Sink Logger - Basic Usage Example ===\n");

    let mut logger = Logger::builder()
        .level(LogLevel::Debug)
        .error_handler(|err| eprintln!("   handler saw: {}", err))
        .stdout();

    println!("1. Logging at different levels:");
    logger.debug(&[&"This is a debug message"]);
    logger.info(&[&"Processing", &100, &"items"]);
    warn!(logger, "Retry attempt {} of {}", 3, 5);
    logger.error(&[&"This is an error message"]);
    critical!(logger, "Unable to recover: {}", "disk full");
    log!(logger, "A line without prefix");

    println!("\n2. Raising the threshold to WARNING:");
    logger.set_level(LogLevel::Warning);
    for level in LogLevel::EMITTING {
        let state = if logger.is_enabled(level) { "visible" } else { "hidden" };
        println!("   {:<8} -> {}", level.to_str(), state);
    }
    logger.debug(&[&"Debug message (hidden)"]);
    info!(logger, "Info message (hidden)");
    warn!(logger, "Warning message (visible)");

    println!("\n3. Custom timestamp layout:");
    logger.set_layout("%H:%M:%S")?;
    warn!(logger, "Short timestamps");
    if let Err(e) = logger.set_layout("%H:%Q") {
        println!("   rejected: {}", e);
    }

    let metrics = logger.metrics();
    println!(
        "\n4. Metrics: {} written, {} filtered, {:.2}% failed writes",
        metrics.emitted_count(),
        metrics.filtered_count(),
        metrics.failure_rate()
    );

    logger.close()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
