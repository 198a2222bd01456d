//! Neo4j query modules

mod integrity;

// Re-export Neo4jClient for the impl blocks
pub(super) use super::neo4j::Neo4jClient;

#[cfg(test)]
pub(crate) use integrity::record_from_row;
