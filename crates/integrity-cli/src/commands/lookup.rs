//! Lookup command: Print the stored hash for a file

use anyhow::{bail, Result};
use integrity_core::{Neo4jClient, Neo4jConfig};

/// Run the lookup command
///
/// # Errors
/// Returns an error if the query fails or no record exists for `filepath`.
pub async fn run(filepath: &str, config: &Neo4jConfig) -> Result<()> {
    let client = Neo4jClient::connect(config).await?;

    match client.find_integrity(filepath).await? {
        Some(record) => println!("{}", record.hash),
        None => bail!("No integrity record for {filepath}"),
    }

    Ok(())
}
