//! Configuration for report generation.
//!
//! This module provides a clean configuration struct for library usage,
//! without any CLI framework dependencies, plus the named constants that
//! pin down the export's date format and the report's locale.
//!
//! # Example
//!
//! ```rust
//! use tweetpack::config::ReportConfig;
//!
//! let config = ReportConfig::new()
//!     .with_input_dir("archive")
//!     .with_output_dir("public")
//!     .with_utc_offset_hours(0);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweetpackError};

/// Directory scanned for exports when none is given.
pub const DEFAULT_INPUT_DIR: &str = "data";

/// Directory the HTML reports are written under when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Layout of `created_at` in Twitter exports, e.g. `Mon Jan 02 15:04:05 +0000 2006`.
pub const SOURCE_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Layout of dates shown in the report.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offset of the report's display timezone (UTC+9, Asia/Tokyo).
pub const DISPLAY_UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Prefix of author profile links; the user id is appended.
pub const USER_URL_BASE: &str = "https://twitter.com/intent/user?user_id=";

/// Prefix of post permalinks; the post id is appended.
pub const POST_URL_BASE: &str = "https://twitter.com/twitter/status/";

/// Marker substituted for newlines in post text.
pub const LINE_BREAK: &str = "<br>";

const MAX_UTC_OFFSET_SECS: i32 = 24 * 60 * 60;

/// Configuration for a batch conversion.
///
/// Every field has a default matching the archive layout the tool was built
/// around: exports under `data/`, reports under `build/`, dates in JST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Root scanned for exports; stripped from input paths when mirroring.
    pub input_dir: PathBuf,

    /// Root the mirrored HTML tree is written under.
    pub output_dir: PathBuf,

    /// Display timezone as seconds east of UTC (default: +9h)
    pub utc_offset_secs: i32,

    /// chrono format string for displayed dates
    pub date_format: String,

    /// Prefix for author profile URLs
    pub user_url_base: String,

    /// Prefix for post permalink URLs
    pub post_url_base: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            utc_offset_secs: DISPLAY_UTC_OFFSET_SECS,
            date_format: DISPLAY_DATE_FORMAT.to_string(),
            user_url_base: USER_URL_BASE.to_string(),
            post_url_base: POST_URL_BASE.to_string(),
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input root directory.
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Sets the output root directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the display offset in seconds east of UTC.
    #[must_use]
    pub fn with_utc_offset_secs(mut self, secs: i32) -> Self {
        self.utc_offset_secs = secs;
        self
    }

    /// Sets the display offset in whole hours east of UTC.
    #[must_use]
    pub fn with_utc_offset_hours(self, hours: i32) -> Self {
        self.with_utc_offset_secs(hours.saturating_mul(60 * 60))
    }

    /// Sets the display date format.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets the author profile URL prefix.
    #[must_use]
    pub fn with_user_url_base(mut self, base: impl Into<String>) -> Self {
        self.user_url_base = base.into();
        self
    }

    /// Sets the post permalink URL prefix.
    #[must_use]
    pub fn with_post_url_base(mut self, base: impl Into<String>) -> Self {
        self.post_url_base = base.into();
        self
    }

    /// Checks that the configuration can drive a conversion.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::InvalidConfig`] when the offset is not
    /// strictly within one day of UTC or the date format is empty.
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_secs.abs() >= MAX_UTC_OFFSET_SECS {
            return Err(TweetpackError::invalid_config(
                "utc_offset_secs",
                format!(
                    "{} is outside ±{} seconds",
                    self.utc_offset_secs, MAX_UTC_OFFSET_SECS
                ),
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(TweetpackError::invalid_config(
                "date_format",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("data"));
        assert_eq!(config.output_dir, PathBuf::from("build"));
        assert_eq!(config.utc_offset_secs, 32_400);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M:%S");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ReportConfig::new()
            .with_input_dir("in")
            .with_output_dir("out")
            .with_utc_offset_hours(-5)
            .with_date_format("%d/%m/%Y")
            .with_user_url_base("https://example.com/u/")
            .with_post_url_base("https://example.com/p/");

        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.utc_offset_secs, -18_000);
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(config.user_url_base, "https://example.com/u/");
        assert_eq!(config.post_url_base, "https://example.com/p/");
    }

    #[test]
    fn test_validate_rejects_bad_offset() {
        let err = ReportConfig::new()
            .with_utc_offset_hours(24)
            .validate()
            .unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("utc_offset_secs"));
    }

    #[test]
    fn test_validate_rejects_empty_format() {
        let err = ReportConfig::new()
            .with_date_format("  ")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }

    #[test]
    fn test_serde_partial() {
        let config: ReportConfig =
            serde_json::from_str(r#"{"output_dir": "site", "utc_offset_secs": 0}"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.utc_offset_secs, 0);
        assert_eq!(config.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
    }
}
