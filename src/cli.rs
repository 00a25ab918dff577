//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Export a lesson transcript and audio from a graded-reader catalog.
///
/// Lessonfetch resolves the lesson referenced by a catalog page address,
/// assembles its transcript from the timed-word document, and saves the
/// transcript and audio next to each other.
#[derive(Parser, Debug)]
#[command(name = "lessonfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Catalog page address of the lesson to export
    pub page_url: String,

    /// Directory to write the transcript and audio into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Override the catalog API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
