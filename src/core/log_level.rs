//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line, in ascending order.
///
/// A logger with threshold `T` emits a line at severity `S` iff `S >= T`.
/// `Disable` sits above every emitting level, so a logger set to it writes
/// nothing except `log` and `abort` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    #[serde(alias = "warn")]
    Warning = 2,
    Error = 3,
    Critical = 4,
    #[serde(alias = "off")]
    Disable = 5,
}

impl LogLevel {
    /// Every level that can actually produce a line, lowest first.
    pub const EMITTING: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Disable => "DISABLE",
        }
    }

    /// Prefix written between the timestamp and the message.
    ///
    /// `Disable` never emits and therefore has no prefix.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            LogLevel::Disable => None,
            level => Some(level.to_str()),
        }
    }

    /// Whether a line at this level reaches the error handler.
    #[inline]
    pub fn triggers_handler(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Critical)
    }

    /// Whether a line at this level passes the given threshold.
    #[inline]
    pub fn passes(&self, threshold: LogLevel) -> bool {
        *self != LogLevel::Disable && *self >= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            "DISABLE" | "OFF" => Ok(LogLevel::Disable),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
