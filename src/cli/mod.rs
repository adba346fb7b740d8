pub mod scan;
pub mod schema;
pub mod tools;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "warnsift")]
#[command(
    author,
    version,
    about = "Build log analyzer: extracts prioritized issues from compiler and tool output"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan configured log files and produce reports
    Scan(ScanArgs),

    /// List the registered tool parsers
    Tools,

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ScanArgs {
    /// Path to config file
    #[arg(short, long, default_value = "warnsift.yaml")]
    pub config: PathBuf,

    /// Override the scan target directory
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Override max parallel parses
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Override output directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Scan specific tools only (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tools: Option<Vec<String>>,

    /// Exit 1 if any high priority issues (CI mode)
    #[arg(long)]
    pub fail_on_high: bool,
}
