//! In-memory store

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::model::IntegrityRecord;
use super::{IntegrityStore, StoreError};

/// Process-local store keyed by file path
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, IntegrityRecord>>,
    failing: HashSet<String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject upserts for the given file paths
    #[must_use]
    pub fn with_failures<I, S>(mut self, filepaths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failing.extend(filepaths.into_iter().map(Into::into));
        self
    }

    /// Look up the record for a file path
    #[must_use]
    pub fn get(&self, filepath: &str) -> Option<IntegrityRecord> {
        self.lock().get(filepath).cloned()
    }

    /// All records, ordered by file path
    #[must_use]
    pub fn records(&self) -> Vec<IntegrityRecord> {
        self.lock().values().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, IntegrityRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl IntegrityStore for MemoryStore {
    async fn upsert(&self, record: &IntegrityRecord) -> Result<(), StoreError> {
        if self.failing.contains(&record.filepath) {
            return Err(StoreError::Unavailable(record.filepath.clone()));
        }
        self.lock().insert(record.filepath.clone(), record.clone());
        Ok(())
    }
}
