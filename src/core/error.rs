//! Error types for the logger

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A logger is already registered under this name
    #[error("{name} logger is already existing")]
    AlreadyRegistered { name: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a registry conflict error
    pub fn already_registered(name: impl Into<String>) -> Self {
        LoggerError::AlreadyRegistered { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

/// Error value handed to a logger's error handler after an Error or
/// Critical line is written.
///
/// Its message is the formatted line, timestamp and prefix included,
/// without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{line}")]
pub struct EmittedError {
    level: LogLevel,
    line: String,
}

impl EmittedError {
    pub(crate) fn new(level: LogLevel, line: impl Into<String>) -> Self {
        Self {
            level,
            line: line.into(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}
