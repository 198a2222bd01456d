//! Hash command: Print integrity records without storing them

use std::path::Path;

use anyhow::Result;
use integrity_core::{hash_tree, IntegrityRecord};

use super::absolute_root;

/// Run the hash command
///
/// # Errors
/// Returns an error if the directory cannot be walked.
pub async fn run(path: &Path) -> Result<()> {
    let records = hash_tree(&absolute_root(path)).await?;
    print!("{}", render_records(&records)?);
    Ok(())
}

/// One JSON object per line
pub(crate) fn render_records(records: &[IntegrityRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
