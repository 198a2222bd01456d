//! Store model types

use serde::{Deserialize, Serialize};

/// The integrity hash stored for one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityRecord {
    /// Absolute path of the asset, unique per store
    pub filepath: String,
    /// SRI value, e.g. `sha384-<base64>`
    pub hash: String,
}

impl IntegrityRecord {
    /// Create a new record
    #[must_use]
    pub fn new(filepath: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            hash: hash.into(),
        }
    }
}
