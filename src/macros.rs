//! Logging macros for format-string emission.
//!
//! Each macro forwards `format_args!` to the matching `*f` method, so
//! nothing is rendered when the level is filtered out.
//!
//! `log!`, `warn!` and `error!` have the same names as the `log` crate's
//! macros. A glob import of both crates is ambiguous, so import the ones
//! you use by name, or call them path-qualified:
//!
//! ```
//! # let logger = sink_logger::Logger::from_writer(std::io::sink());
//! use sink_logger::{info, warn as warn_line};
//!
//! info!(logger, "imported by name");
//! warn_line!(logger, "renamed on import");
//! sink_logger::error!(logger, "path-qualified");
//! ```
//!
//! # Examples
//!
//! ```
//! use sink_logger::prelude::*;
//! use sink_logger::info;
//!
//! let logger = Logger::from_writer(std::io::sink());
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a line without prefix, whatever the threshold.
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let logger = Logger::from_writer(std::io::sink());
/// use sink_logger::log;
/// log!(logger, "Simple message");
/// log!(logger, "Status code: {}", 200);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.logf(format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let mut logger = Logger::from_writer(std::io::sink());
/// # logger.set_level(LogLevel::Debug);
/// use sink_logger::debug;
/// debug!(logger, "Entering function: calculate()");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let logger = Logger::from_writer(std::io::sink());
/// use sink_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log an error-level message. Runs the logger's error handler.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a critical-level message. Runs the logger's error handler.
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let logger = Logger::from_writer(std::io::sink());
/// use sink_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.criticalf(format_args!($($arg)+))
    };
}

/// Log an abort line and terminate with `code`.
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let logger = Logger::builder().mock().writer(std::io::sink());
/// use sink_logger::abort;
/// abort!(logger, 2, "configuration missing: {}", "database.url");
/// ```
#[macro_export]
macro_rules! abort {
    ($logger:expr, $code:expr, $($arg:tt)+) => {
        $logger.abortf($code, format_args!($($arg)+))
    };
}
