//! # tweetpack CLI
//!
//! Command-line interface for the tweetpack library.

use std::process;
use std::sync::Arc;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use tweetpack::TweetpackError;
use tweetpack::batch::BatchConverter;
use tweetpack::cli::Args;
use tweetpack::progress::FileReport;
use tweetpack::render::HtmlRenderer;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        println!("<ERROR> {}: {}", e.stage(), e);
        process::exit(1);
    }
    println!("End.");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), TweetpackError> {
    let args = <Args as ClapParser>::parse();
    let config = args.to_config();
    let renderer = HtmlRenderer::from_config(&config);

    let converter = BatchConverter::new(&config, &renderer)?
        .with_progress(Arc::new(|report: &FileReport| println!("{report}")));

    let summary = match &args.file {
        Some(file) => converter.run(std::slice::from_ref(file))?,
        None => converter.run_dir()?,
    };

    tracing::info!(
        total = summary.total,
        written = summary.written,
        skipped = summary.skipped,
        posts = summary.posts,
        reshares = summary.reshares,
        favorites = summary.favorites,
        "done"
    );
    Ok(())
}
