//! Scanner module: Asset discovery and SRI digests
//!
//! Responsible for walking a static asset directory, deciding which
//! files get an integrity hash, and computing that hash.

mod asset;
mod digest;
mod walker;

use std::path::PathBuf;

use thiserror::Error;

pub use asset::{is_eligible, AssetKind};
pub use digest::{compute_sri_hash, sri_digest, SRI_PREFIX};
pub use walker::{hash_tree, save_subresource_integrity_hash, WalkSummary};

/// Errors that can occur while scanning an asset tree
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
