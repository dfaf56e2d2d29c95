//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod sink;
pub mod terminator;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{EmittedError, LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{ErrorHandler, Logger, LoggerBuilder, ABORT_PREFIX};
pub use metrics::LoggerMetrics;
pub use registry::LoggerRegistry;
pub use sink::{ClosingWriter, Sink, WriteClose};
pub use terminator::{MockTerminator, ProcessExit, Terminator};
pub use timestamp::{TimestampFormat, RFC3339_NANO_LAYOUT};
