//! # Sink Logger
//!
//! A minimal leveled logger writing timestamped, prefixed lines to any byte
//! sink: a console stream, a file, or any `Write` implementation.
//!
//! ## Features
//!
//! - **Leveled**: Debug < Info < Warning < Error < Critical, plus `Disable`
//! - **Thread Safe**: one lock per logger, lines never interleave
//! - **Error Hook**: react to Error and Critical lines through a callback
//! - **Shared Loggers**: an injectable registry keyed by logger name
//!
//! ## Line format
//!
//! ```text
//! [2025-01-08T10:30:45.123456789+01:00] WARNING - disk usage 91%
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use sink_logger::prelude::*;
//! // Import macros by name; `log`, `warn` and `error` share names with the
//! // `log` crate's macros
//! use sink_logger::{info, warn};
//!
//! let logger = Logger::builder()
//!     .level(LogLevel::Debug)
//!     .writer(std::io::sink());
//!
//! logger.info(&[&"Processing", &100, &"items"]);
//! info!(logger, "Server listening on port {}", 8080);
//! warn!(logger, "Retry attempt {} of {}", 3, 5);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        EmittedError, ErrorHandler, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, LoggerRegistry, MockTerminator, ProcessExit, Result, Sink, Terminator,
        TimestampFormat, WriteClose,
    };
}

pub use crate::core::{
    ClosingWriter, EmittedError, ErrorHandler, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, LoggerRegistry, MockTerminator, ProcessExit, Result, Sink,
    Terminator, TimestampFormat, WriteClose, ABORT_PREFIX,
};
pub use sinks::open_log_file;
