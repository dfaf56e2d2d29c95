//! Shared registry example
//!
//! Demonstrates sharing one named logger between independent components.
//!
//! Run with: cargo run --example shared_registry

use sink_logger::prelude::*;
use std::sync::Arc;

fn worker(registry: &LoggerRegistry, id: usize) {
    match registry.get("app") {
        Some(logger) => logger.info(&[&"worker", &id, &"reporting"]),
        None => eprintln!("worker {} found no shared logger", id),
    }
}

fn main() -> Result<()> {
    let registry = LoggerRegistry::new();

    let app = Arc::new(Logger::builder().name("app").stdout());
    registry.share(Arc::clone(&app))?;

    // A second component trying to install its own "app" logger falls back
    // to the registered one.
    let late = Arc::new(Logger::builder().name("app").stderr());
    if let Err(e) = registry.share(late) {
        println!("registration refused: {}", e);
    }

    for id in 0..3 {
        worker(&registry, id);
    }

    app.close()?;
    Ok(())
}
