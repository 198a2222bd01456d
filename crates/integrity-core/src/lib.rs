//! integrity-core: Subresource Integrity hashes for static assets
//!
//! Walks a static asset directory, computes an SRI digest
//! (`sha384-<base64>`) for every stylesheet and script, and upserts
//! one record per file into a store keyed by absolute file path.
//!
//! # Stores
//!
//! - **Neo4j** - one node per asset, merged on `filepath`
//! - **Memory** - process-local map, used for dry runs and tests

pub mod scanner;
pub mod store;

// Re-export commonly used types
pub use scanner::{
    compute_sri_hash, hash_tree, is_eligible, save_subresource_integrity_hash, sri_digest,
    AssetKind, ScanError, WalkSummary, SRI_PREFIX,
};
pub use store::model::IntegrityRecord;
pub use store::neo4j::{Neo4jClient, Neo4jConfig};
pub use store::{IntegrityStore, MemoryStore, StoreError};
