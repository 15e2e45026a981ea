//! Progress reporting for batch conversions.
//!
//! This module provides a callback-based progress reporting mechanism: the
//! batch driver emits one [`FileReport`] per input file, and the caller
//! decides where it goes (the CLI prints it to stdout).
//!
//! # Example
//!
//! ```rust
//! use tweetpack::progress::{FileReport, Progress, ProgressCallback};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|report: &FileReport| {
//!     println!("{report}");
//! });
//!
//! let report = FileReport::written(
//!     Progress::new(1, 3),
//!     PathBuf::from("data/2024/01.json"),
//!     PathBuf::from("build/2024/01.html"),
//! );
//! callback(&report);
//! assert_eq!(report.to_string(), "[1/3] data/2024/01.json -> build/2024/01.html");
//! ```

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::TweetpackError;

/// Position of a file within a batch, 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Index of the current file (1-based).
    pub current: usize,

    /// Number of files in the batch.
    pub total: usize,
}

impl Progress {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}]", self.current, self.total)
    }
}

/// What happened to one input file.
#[derive(Debug)]
pub enum FileStatus {
    /// The report was written to `output`.
    Written { output: PathBuf },

    /// The file was skipped because of a per-file error.
    Skipped { error: TweetpackError },
}

/// Outcome of one file, with its position in the batch.
#[derive(Debug)]
pub struct FileReport {
    pub progress: Progress,
    pub input: PathBuf,
    pub status: FileStatus,
}

impl FileReport {
    pub fn written(progress: Progress, input: PathBuf, output: PathBuf) -> Self {
        Self {
            progress,
            input,
            status: FileStatus::Written { output },
        }
    }

    pub fn skipped(progress: Progress, input: PathBuf, error: TweetpackError) -> Self {
        Self {
            progress,
            input,
            status: FileStatus::Skipped { error },
        }
    }

    /// Returns `true` if the report was written.
    pub fn is_written(&self) -> bool {
        matches!(self.status, FileStatus::Written { .. })
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            FileStatus::Written { output } => write!(
                f,
                "{} {} -> {}",
                self.progress,
                self.input.display(),
                output.display()
            ),
            FileStatus::Skipped { error } => write!(
                f,
                "{} <ERROR> {}: {}",
                self.progress,
                error.stage(),
                self.input.display()
            ),
        }
    }
}

/// Callback invoked once per processed file.
pub type ProgressCallback = Arc<dyn Fn(&FileReport) + Send + Sync>;
