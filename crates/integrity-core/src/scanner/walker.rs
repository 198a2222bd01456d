//! Tree walker: Hashes every asset under a directory and upserts it

use std::path::Path;

use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

use super::{compute_sri_hash, is_eligible, ScanError};
use crate::store::model::IntegrityRecord;
use crate::store::{IntegrityStore, MemoryStore, StoreError};

/// Counts from a single walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Records written to the store
    pub upserted: usize,
    /// Assets whose upsert was rejected by the store
    pub failed_upserts: usize,
    /// Assets that could not be read
    pub unreadable: usize,
    /// Files that are not assets
    pub skipped: usize,
}

impl WalkSummary {
    /// Number of eligible files encountered, whatever happened to them
    #[must_use]
    pub const fn assets_seen(&self) -> usize {
        self.upserted + self.failed_upserts + self.unreadable
    }
}

/// Hash every `.css` and `.js` file under `root` and upsert it into `store`
///
/// Directories are walked depth-first and symlinks are followed. Each
/// upsert is awaited before the next entry is visited. A failed upsert or
/// an unreadable asset is logged and counted, and the walk carries on.
///
/// # Errors
/// Returns an error if `root` is missing or not a directory, or if any
/// directory below it cannot be listed.
pub async fn save_subresource_integrity_hash(
    store: &dyn IntegrityStore,
    root: &Path,
) -> Result<WalkSummary, ScanError> {
    info!("Hashing static assets under {}", root.display());

    let mut summary = WalkSummary::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }
        if entry.depth() == 0 {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }
        if !is_eligible(entry.file_name()) {
            trace!("Skipping {}", entry.path().display());
            summary.skipped += 1;
            continue;
        }

        // Record keys must round-trip, so non-UTF-8 paths are not stored
        let Some(filepath) = entry.path().to_str() else {
            warn!("Skipping asset with non-UTF-8 path: {}", entry.path().display());
            summary.unreadable += 1;
            continue;
        };

        let hash = match compute_sri_hash(entry.path()) {
            Ok(hash) => hash,
            Err(e) => {
                warn!("Skipping unreadable asset: {}", e);
                summary.unreadable += 1;
                continue;
            }
        };

        let record = IntegrityRecord::new(filepath, hash);
        let result = store.upsert(&record).await;
        handle_upsert_result(result, &record, &mut summary);
    }

    info!(
        "Hashed {} assets: {} stored, {} failed, {} unreadable",
        summary.assets_seen(),
        summary.upserted,
        summary.failed_upserts,
        summary.unreadable
    );

    Ok(summary)
}

/// Hash every asset under `root` without persisting anything
///
/// Records come back ordered by file path.
///
/// # Errors
/// Returns an error under the same conditions as
/// [`save_subresource_integrity_hash`].
pub async fn hash_tree(root: &Path) -> Result<Vec<IntegrityRecord>, ScanError> {
    let store = MemoryStore::new();
    save_subresource_integrity_hash(&store, root).await?;
    Ok(store.records())
}

pub(crate) fn handle_upsert_result(
    result: Result<(), StoreError>,
    record: &IntegrityRecord,
    summary: &mut WalkSummary,
) {
    match result {
        Ok(()) => {
            debug!("Stored {} for {}", record.hash, record.filepath);
            summary.upserted += 1;
        }
        Err(e) => {
            warn!("Failed to store hash for {}: {}", record.filepath, e);
            summary.failed_upserts += 1;
        }
    }
}
