//! Source-date parsing and display formatting.
//!
//! Twitter exports stamp records like `Mon Jan 02 15:04:05 +0000 2006`. The
//! report shows them in a single fixed offset (JST by default) using a
//! configurable chrono format.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};

use crate::config::{ReportConfig, SOURCE_DATE_FORMAT};
use crate::error::{Result, TweetpackError};

/// Converts export timestamps into the report's display zone and format.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    offset: FixedOffset,
    format: String,
}

impl DateFormatter {
    /// Creates a formatter for the given offset and display format.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::InvalidConfig`] if the offset is out of
    /// range or the format string contains an invalid specifier.
    pub fn new(utc_offset_secs: i32, format: impl Into<String>) -> Result<Self> {
        let offset = FixedOffset::east_opt(utc_offset_secs).ok_or_else(|| {
            TweetpackError::invalid_config(
                "utc_offset_secs",
                format!("{utc_offset_secs} is not a valid offset"),
            )
        })?;
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(TweetpackError::invalid_config(
                "date_format",
                format!("'{format}' is not a valid chrono format"),
            ));
        }
        Ok(Self { offset, format })
    }

    /// Builds a formatter from a report configuration.
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        Self::new(config.utc_offset_secs, config.date_format.clone())
    }

    /// Parses an export timestamp and shifts it into the display offset.
    ///
    /// Returns `None` if the string does not match the export layout.
    pub fn parse(&self, raw: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(raw.trim(), SOURCE_DATE_FORMAT)
            .ok()
            .map(|dt| dt.with_timezone(&self.offset))
    }

    /// Formats an export timestamp for display.
    ///
    /// Unparseable input yields an empty string.
    pub fn format(&self, raw: &str) -> String {
        match self.parse(raw) {
            Some(dt) => self.format_datetime(&dt),
            None => {
                if !raw.is_empty() {
                    tracing::debug!(date = raw, "unrecognized export timestamp");
                }
                String::new()
            }
        }
    }

    /// Formats an already-parsed date with the display format.
    fn format_datetime(&self, dt: &DateTime<FixedOffset>) -> String {
        dt.with_timezone(&self.offset).format(&self.format).to_string()
    }
}
