use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use warnsift::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("warnsift=debug")
    } else {
        EnvFilter::new("warnsift=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Scan(args) => cli::scan::execute(args).await,
        Commands::Tools => cli::tools::execute(),
        Commands::Schema => cli::schema::execute(),
    }
}
