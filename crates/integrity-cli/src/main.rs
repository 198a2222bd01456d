//! integrity: Subresource Integrity hashes for static assets

use clap::Parser;
use integrity_cli::logging::setup_logging;
use integrity_cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Save { path, neo4j } => {
            commands::save::run(&path, &neo4j.to_config()).await?;
        }
        Commands::Hash { path } => {
            commands::hash::run(&path).await?;
        }
        Commands::Lookup { filepath, neo4j } => {
            commands::lookup::run(&filepath, &neo4j.to_config()).await?;
        }
    }

    Ok(())
}
