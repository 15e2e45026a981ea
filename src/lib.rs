//! # Tweetpack
//!
//! A Rust library and CLI for turning archived Twitter export data into
//! static HTML report pages.
//!
//! ## Overview
//!
//! An archive is a directory tree of JSON files, each a JSON array of
//! records. A record is either a timeline post (an original tweet or a
//! retweet embedding the original) or a favorite. For every file, tweetpack:
//!
//! 1. parses the array once, classifying each record as post or favorite
//! 2. normalizes posts into one flat [`NormalizedPost`] shape, taking a
//!    retweet's author and text from the embedded original
//! 3. builds a [`ReportView`](core::ReportView) with post/retweet/reply/favorite counts
//! 4. renders it with a [`Renderer`](render::Renderer)
//! 5. writes `<output>/<mirrored dirs>/<stem>.html`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tweetpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = ReportConfig::new().with_input_dir("data").with_output_dir("build");
//!     let renderer = HtmlRenderer::from_config(&config);
//!
//!     let summary = BatchConverter::new(&config, &renderer)?.run_dir()?;
//!     println!("{} reports written", summary.written);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - raw export records and the single-pass classifier
//! - [`core`] - date handling, normalization and report views
//! - [`render`] - [`Renderer`](render::Renderer) trait, link helpers, bundled HTML page
//! - [`batch`] - input discovery, output mirroring and the batch driver
//! - [`progress`] - per-file `[i/total]` reports
//! - [`config`] - [`ReportConfig`](config::ReportConfig) and named constants
//! - [`cli`] - CLI arguments (`cli` feature)
//! - [`error`] - unified error types ([`TweetpackError`], [`Result`])
//! - [`prelude`] - convenient re-exports

pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod post;
pub mod progress;
pub mod render;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TweetpackError};
pub use post::NormalizedPost;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tweetpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::NormalizedPost;

    pub use crate::error::{Result, TweetpackError};

    pub use crate::config::ReportConfig;

    pub use crate::parsing::{ExportRecord, RawFavorite, RawPost, parse_export};

    pub use crate::core::{DateFormatter, ReportView, normalize_posts};

    pub use crate::render::{HtmlRenderer, LinkBuilder, Renderer};

    pub use crate::batch::{BatchConverter, BatchSummary};

    pub use crate::progress::{FileReport, Progress, ProgressCallback};
}
