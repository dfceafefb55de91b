//! CLI commands and argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Largest accepted `--page-size`
pub const MAX_PAGE_SIZE: u64 = 100_000;

/// Dump every record of a FileMaker Data API server as JSON lines
#[derive(Parser, Debug, Clone)]
#[command(name = "fmdump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Server root URL: scheme://[user:password@]host[:port]
    pub url: String,

    /// Directory to create for the dump files (must not exist)
    pub output_dir: PathBuf,

    /// Databases to dump (comma-separated, default all)
    #[arg(long, value_delimiter = ',')]
    pub databases: Vec<String>,

    /// Layouts to dump in each database (comma-separated, default all)
    #[arg(long, value_delimiter = ',')]
    pub layouts: Vec<String>,

    /// Records requested per page
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..=MAX_PAGE_SIZE))]
    pub page_size: u64,

    /// Connect and request timeout in seconds
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
