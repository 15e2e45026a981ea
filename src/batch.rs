//! Batch conversion of export files into report pages.
//!
//! The driver is strictly sequential: each file is read, parsed, normalized,
//! rendered and written before the next one is touched. Setup failures
//! (scanning the input root, reading a file) abort the batch; every other
//! failure skips only the file at hand.
//!
//! # Example
//!
//! ```rust,no_run
//! use tweetpack::batch::BatchConverter;
//! use tweetpack::config::ReportConfig;
//! use tweetpack::render::HtmlRenderer;
//!
//! let config = ReportConfig::new().with_input_dir("data").with_output_dir("build");
//! let renderer = HtmlRenderer::from_config(&config);
//!
//! let summary = BatchConverter::new(&config, &renderer)?.run_dir()?;
//! println!("{} written, {} skipped", summary.written, summary.skipped);
//! # Ok::<(), tweetpack::TweetpackError>(())
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ReportConfig;
use crate::core::{DateFormatter, ReportView};
use crate::error::{Result, TweetpackError};
use crate::parsing::parse_export;
use crate::progress::{FileReport, Progress, ProgressCallback};
use crate::render::Renderer;

const OUTPUT_EXTENSION: &str = "html";

/// Lists every file under `root`, recursively, in path order.
///
/// Symbolic links are followed, so a linked file is listed like any other.
///
/// # Errors
///
/// Returns [`TweetpackError::Discover`] if `root` or any directory below it
/// cannot be read.
pub fn discover_inputs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| TweetpackError::Discover {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Where the report for `input` is written.
///
/// The input's directory is mirrored under the output root with the input
/// root stripped; the file keeps its stem and gets an `.html` extension.
/// Inputs outside the input root keep their relative directory components.
///
/// ```rust
/// use std::path::Path;
/// use tweetpack::batch::output_path;
/// use tweetpack::config::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(
///     output_path(&config, Path::new("data/2024/01/15.json")),
///     Path::new("build/2024/01/15.html")
/// );
/// ```
pub fn output_path(config: &ReportConfig, input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let relative: PathBuf = match parent.strip_prefix(&config.input_dir) {
        Ok(rest) => rest.to_path_buf(),
        Err(_) => parent
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect(),
    };

    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);

    config.output_dir.join(relative).join(name)
}

/// Writes a rendered page, creating parent directories as needed.
///
/// Existing files are truncated.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TweetpackError::write(parent, e))?;
    }
    let file = File::create(path).map_err(|e| TweetpackError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| TweetpackError::write(path, e))
}

/// Result of converting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConversion {
    pub output: PathBuf,
    pub posts: usize,
    pub reshares: usize,
    pub favorites: usize,
}

/// Totals for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files considered.
    pub total: usize,
    /// Reports written.
    pub written: usize,
    /// Files skipped after a per-file error.
    pub skipped: usize,
    pub posts: usize,
    pub reshares: usize,
    pub favorites: usize,
}

impl BatchSummary {
    fn record(&mut self, conversion: &FileConversion) {
        self.written += 1;
        self.posts += conversion.posts;
        self.reshares += conversion.reshares;
        self.favorites += conversion.favorites;
    }

    /// Returns `true` if every file was written.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }
}

/// Sequential export-to-report converter.
///
/// Holds the configuration and renderer for the whole run; nothing else is
/// shared between files.
pub struct BatchConverter<'a, R: Renderer + ?Sized> {
    config: &'a ReportConfig,
    renderer: &'a R,
    dates: DateFormatter,
    progress: Option<ProgressCallback>,
}

impl<'a, R: Renderer + ?Sized> BatchConverter<'a, R> {
    /// Creates a converter.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: &'a ReportConfig, renderer: &'a R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            renderer,
            dates: DateFormatter::from_config(config)?,
            progress: None,
        })
    }

    /// Sets a callback invoked after each file.
    #[must_use]
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    /// Converts every file under the configured input root.
    pub fn run_dir(&self) -> Result<BatchSummary> {
        let inputs = discover_inputs(&self.config.input_dir)?;
        tracing::info!(
            root = %self.config.input_dir.display(),
            files = inputs.len(),
            "discovered inputs"
        );
        self.run(&inputs)
    }

    /// Converts the given files in order.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal error (see [`TweetpackError::is_fatal`]);
    /// per-file errors are reported through the progress callback and
    /// counted in [`BatchSummary::skipped`].
    pub fn run(&self, inputs: &[PathBuf]) -> Result<BatchSummary> {
        let mut summary = BatchSummary {
            total: inputs.len(),
            ..BatchSummary::default()
        };

        for (i, input) in inputs.iter().enumerate() {
            let progress = Progress::new(i + 1, inputs.len());
            let report = match self.convert_file(input) {
                Ok(conversion) => {
                    tracing::debug!(
                        input = %input.display(),
                        output = %conversion.output.display(),
                        posts = conversion.posts,
                        "report written"
                    );
                    summary.record(&conversion);
                    FileReport::written(progress, input.clone(), conversion.output)
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(input = %input.display(), error = %e, "skipping file");
                    summary.skipped += 1;
                    FileReport::skipped(progress, input.clone(), e)
                }
            };
            if let Some(callback) = &self.progress {
                callback(&report);
            }
        }

        tracing::info!(
            written = summary.written,
            skipped = summary.skipped,
            "batch finished"
        );
        Ok(summary)
    }

    /// Converts a single file end to end.
    pub fn convert_file(&self, input: &Path) -> Result<FileConversion> {
        let bytes = fs::read(input).map_err(|e| TweetpackError::read_input(input, e))?;

        let records = parse_export(&bytes).map_err(|e| match e {
            TweetpackError::Parse { source, .. } => {
                TweetpackError::parse(source, Some(input.to_path_buf()))
            }
            other => other,
        })?;

        let view = ReportView::build(records, &self.dates);
        let html = self.renderer.render(&view)?;

        let output = output_path(self.config, input);
        write_report(&output, &html)?;

        Ok(FileConversion {
            output,
            posts: view.count_posts,
            reshares: view.count_reshares,
            favorites: view.count_favorites,
        })
    }
}
