//! Serializable logger configuration

use super::error::Result;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Settings a logger can be built from.
///
/// # Example
///
/// ```
/// use sink_logger::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json_str(r#"{ "name": "audit", "level": "warning" }"#)
///     .expect("valid config");
/// assert_eq!(config.level, LogLevel::Warning);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Registry name
    pub name: Option<String>,
    pub level: LogLevel,
    pub timestamp_format: TimestampFormat,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config and check its timestamp layout
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.timestamp_format.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}
