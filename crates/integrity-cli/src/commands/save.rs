//! Save command: Hash a static directory and store the results in Neo4j

use std::path::Path;

use anyhow::Result;
use integrity_core::{save_subresource_integrity_hash, Neo4jClient, Neo4jConfig, WalkSummary};
use tracing::{info, warn};

use super::absolute_root;

/// Run the save command
///
/// # Errors
/// Returns an error if the Neo4j connection fails or the directory cannot
/// be walked. Individual upsert failures are logged, not returned.
pub async fn run(path: &Path, config: &Neo4jConfig) -> Result<()> {
    let root = absolute_root(path);
    info!("Saving integrity hashes for {}", root.display());

    let client = connect_neo4j(config).await?;
    let summary = save_subresource_integrity_hash(&client, &root).await?;

    log_summary(&summary);
    Ok(())
}

async fn connect_neo4j(config: &Neo4jConfig) -> Result<Neo4jClient> {
    Ok(Neo4jClient::connect(config).await?)
}

fn log_summary(summary: &WalkSummary) {
    info!(
        "✓ Saved {} integrity hashes ({} non-asset files skipped)",
        summary.upserted, summary.skipped
    );
    if summary.failed_upserts > 0 || summary.unreadable > 0 {
        warn!(
            "{} assets were not stored: {} rejected by the store, {} unreadable",
            summary.failed_upserts + summary.unreadable,
            summary.failed_upserts,
            summary.unreadable
        );
    }
}
