//! Timestamp layouts
//!
//! A logger stamps every line with the wall-clock time captured right before
//! formatting. The layout is configurable per logger; the default is a
//! nanosecond RFC 3339 variant carrying the local numeric UTC offset, which
//! sorts lexicographically within one offset.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// strftime layout behind [`TimestampFormat::Rfc3339Nano`].
pub const RFC3339_NANO_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.9f%:z";

/// Timestamp layout options
///
/// # Examples
///
/// ```
/// use sink_logger::TimestampFormat;
///
/// // Default layout: 2025-01-08T10:30:45.123456789+01:00
/// let format = TimestampFormat::default();
/// let stamp = format.now();
/// assert!(stamp.contains('T'));
///
/// // Apache-style layout
/// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with nanoseconds and numeric offset: `2025-01-08T10:30:45.123456789+00:00`
    #[default]
    Rfc3339Nano,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123+00:00`
    Iso8601Millis,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456+00:00`
    Iso8601Micros,

    /// RFC 3339 at second precision: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime layout
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime in any time zone according to this layout
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Rfc3339Nano => datetime.format(RFC3339_NANO_LAYOUT).to_string(),
            TimestampFormat::Iso8601Millis => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
            }
            TimestampFormat::Iso8601Micros => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
            }
            TimestampFormat::Rfc3339 => datetime.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(layout) => {
                // chrono reports bad specifiers as a fmt::Error at render time
                let mut stamp = String::with_capacity(layout.len() + 16);
                if write!(stamp, "{}", datetime.format(layout)).is_err() {
                    return layout.clone();
                }
                stamp
            }
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }

    /// Build a custom layout from a strftime string.
    ///
    /// The layout is not checked. A layout chrono cannot render is written
    /// out verbatim instead of a timestamp; use [`TimestampFormat::try_custom`]
    /// to reject it up front.
    #[must_use]
    pub fn custom(layout: impl Into<String>) -> Self {
        TimestampFormat::Custom(layout.into())
    }

    /// Build a custom layout, rejecting unknown strftime specifiers
    pub fn try_custom(layout: impl Into<String>) -> Result<Self> {
        let format = TimestampFormat::Custom(layout.into());
        format.validate()?;
        Ok(format)
    }

    /// Check that a custom layout only uses specifiers chrono understands.
    /// Built-in layouts are always valid.
    pub fn validate(&self) -> Result<()> {
        let TimestampFormat::Custom(layout) = self else {
            return Ok(());
        };
        if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "TimestampFormat",
                format!("invalid strftime layout '{}'", layout),
            ));
        }
        Ok(())
    }
}
