//! Unified error types for tweetpack.
//!
//! This module provides a single [`TweetpackError`] enum that covers all error
//! cases in the library.
//!
//! # Fatal vs per-file errors
//!
//! The batch driver distinguishes two classes of failure:
//!
//! - **Fatal** setup errors (input discovery, reading a file's bytes, invalid
//!   configuration) abort the whole run.
//! - **Per-file** errors (malformed JSON, render failure, write failure) are
//!   reported and the driver moves on to the next file.
//!
//! Use [`TweetpackError::is_fatal`] to tell them apart.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tweetpack operations.
///
/// # Example
///
/// ```rust
/// use tweetpack::error::Result;
/// use tweetpack::NormalizedPost;
///
/// fn my_function() -> Result<Vec<NormalizedPost>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TweetpackError>;

/// The error type for all tweetpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TweetpackError {
    /// The input directory could not be enumerated.
    #[error("Failed to scan input directory {}: {source}", path.display())]
    Discover {
        /// The directory being scanned
        path: PathBuf,
        /// The underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        /// The input file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input file is not a valid export array.
    #[error("Failed to parse Twitter export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A renderer failed to produce a page.
    #[error("{renderer} renderer failed: {message}")]
    Render {
        /// Name of the renderer
        renderer: &'static str,
        /// Description of the failure
        message: String,
    },

    /// The rendered page could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// The output file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A configuration value is out of range or malformed.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TweetpackError {
    /// Creates a parse error for an export file.
    pub fn parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        TweetpackError::Parse { source, path }
    }

    /// Creates a render error.
    pub fn render(renderer: &'static str, message: impl Into<String>) -> Self {
        TweetpackError::Render {
            renderer,
            message: message.into(),
        }
    }

    /// Creates a write error for an output file.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TweetpackError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a read error for an input file.
    pub fn read_input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TweetpackError::ReadInput {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        TweetpackError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` if this error should abort the whole batch.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TweetpackError::Discover { .. }
                | TweetpackError::ReadInput { .. }
                | TweetpackError::InvalidConfig { .. }
        )
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, TweetpackError::Parse { .. })
    }

    /// Returns `true` if this is a render error.
    pub fn is_render(&self) -> bool {
        matches!(self, TweetpackError::Render { .. })
    }

    /// Returns `true` if this is a write error.
    pub fn is_write(&self) -> bool {
        matches!(self, TweetpackError::Write { .. })
    }

    /// Short label for the pipeline stage that failed, used in progress lines.
    pub fn stage(&self) -> &'static str {
        match self {
            TweetpackError::Discover { .. } => "File seek error",
            TweetpackError::ReadInput { .. } => "File read error",
            TweetpackError::Parse { .. } => "JSON parse error",
            TweetpackError::Render { .. } => "Template execute error",
            TweetpackError::Write { .. } => "File write error",
            TweetpackError::InvalidConfig { .. } => "Configuration error",
        }
    }
}
