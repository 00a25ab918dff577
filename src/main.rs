//! CLI entry point for the lessonfetch tool.

use anyhow::Result;
use clap::Parser;
use lessonfetch::{CatalogResolver, Exporter, FsSink, TranscriptFetcher};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Lessonfetch starting");

    let resolver = match &args.api_base {
        Some(base) => CatalogResolver::with_base_url(base.clone())?,
        None => CatalogResolver::new()?,
    };
    let exporter = Exporter::new(resolver, TranscriptFetcher::new()?);

    tokio::fs::create_dir_all(&args.output_dir).await?;
    let sink = FsSink::new(&args.output_dir)?;

    let outcome = exporter.export(Some(&args.page_url), &sink).await?;

    info!(
        suggested_name = %outcome.suggested_name,
        transcript_chars = outcome.transcript.chars().count(),
        audio_url = %outcome.audio_url,
        output_dir = %args.output_dir.display(),
        "Export complete"
    );

    Ok(())
}
