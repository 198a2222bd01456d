//! Store module: Integrity records and their persistence
//!
//! Defines the record model, the storage trait the walker writes
//! through, and the Neo4j and in-memory implementations.

mod memory;
pub mod model;
pub mod neo4j;
pub mod queries;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStore;
use model::IntegrityRecord;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Invalid node label: {0:?}")]
    InvalidLabel(String),

    #[error("Store unavailable for {0}")]
    Unavailable(String),

    #[error("Neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),
}

/// A store that keeps one integrity record per file path
#[async_trait]
pub trait IntegrityStore: Send + Sync {
    /// Insert `record`, or replace the record that has the same `filepath`
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    async fn upsert(&self, record: &IntegrityRecord) -> Result<(), StoreError>;
}
