//! Command-line interface definition using clap.
//!
//! [`Args`] maps one-to-one onto [`ReportConfig`] plus the choice between
//! scanning a directory and converting a single file.
//!
//! ```rust
//! use clap::Parser;
//! use tweetpack::cli::Args;
//!
//! let args = Args::parse_from(["tweetpack", "-d", "archive", "-o", "site"]);
//! let config = args.to_config();
//! assert_eq!(config.input_dir.to_str(), Some("archive"));
//! assert_eq!(config.output_dir.to_str(), Some("site"));
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DISPLAY_DATE_FORMAT, ReportConfig};

/// Convert Twitter export JSON (tweets, retweets, favorites) into static
/// HTML reports.
#[derive(Parser, Debug, Clone)]
#[command(name = "tweetpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tweetpack
    tweetpack -d archive -o public
    tweetpack -f data/2024/01/15.json
    tweetpack --utc-offset 0 --date-format '%d %b %Y %H:%M'")]
pub struct Args {
    /// Target directory of batch processing
    #[arg(short = 'd', long = "dir", default_value = DEFAULT_INPUT_DIR)]
    pub dir: PathBuf,

    /// Source JSON file name (converts only this file)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output directory for the generated HTML tree
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Display timezone as whole hours east of UTC
    #[arg(long, value_name = "HOURS", default_value_t = 9, allow_hyphen_values = true)]
    pub utc_offset: i32,

    /// chrono format string for displayed dates
    #[arg(long, value_name = "FMT", default_value = DISPLAY_DATE_FORMAT)]
    pub date_format: String,
}

impl Args {
    /// Builds the report configuration these arguments describe.
    pub fn to_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_input_dir(&self.dir)
            .with_output_dir(&self.output)
            .with_utc_offset_hours(self.utc_offset)
            .with_date_format(&self.date_format)
    }
}
