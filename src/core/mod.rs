//! Core processing logic for tweetpack.
//!
//! This module contains:
//! - [`dates`] - Export timestamp parsing and display formatting
//! - [`normalizer`] - Post/retweet collapse into [`NormalizedPost`](crate::NormalizedPost)
//! - [`report`] - [`ReportView`] construction
//!
//! # Quick Start
//!
//! ```rust
//! use tweetpack::core::{DateFormatter, ReportView};
//! use tweetpack::parsing::parse_export;
//!
//! let records = parse_export(br#"[{"id_str": "1", "retweeted": false}, {"id_str": "2"}]"#)?;
//! let dates = DateFormatter::new(9 * 3600, "%Y-%m-%d %H:%M:%S")?;
//! let view = ReportView::build(records, &dates);
//!
//! assert_eq!(view.count_posts, 1);
//! assert_eq!(view.count_favorites, 1);
//! # Ok::<(), tweetpack::TweetpackError>(())
//! ```

pub mod dates;
pub mod normalizer;
pub mod report;

pub use dates::DateFormatter;
pub use normalizer::{NormalizeStats, Normalizer, normalize_posts, text_to_html};
pub use report::ReportView;
