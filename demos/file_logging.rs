//! File logging example
//!
//! Demonstrates append semantics across reopening the same log file.
//!
//! Run with: cargo run --example file_logging

use sink_logger::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Sink Logger - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("sink_logger_demo.log");
    let _ = fs::remove_file(&log_path);

    let logger = Logger::from_path(&log_path, 0o644)?;
    logger.info(&[&"Application started"]);
    logger.close()?;

    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .path(&log_path, 0o644)?;
    logger.warn(&[&"Reopened the same file"]);
    logger.error(&[&"Error code:", &500]);
    logger.close()?;

    println!("Log written to: {}\n", log_path.display());
    print!("{}", fs::read_to_string(&log_path)?);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
