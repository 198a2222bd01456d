//! Integrity record queries

use async_trait::async_trait;
use neo4rs::{Query, Row};

use super::Neo4jClient;
use crate::store::model::IntegrityRecord;
use crate::store::{IntegrityStore, StoreError};

impl Neo4jClient {
    /// Find the record for an exact file path
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_integrity(
        &self,
        filepath: &str,
    ) -> Result<Option<IntegrityRecord>, StoreError> {
        let query = Query::new(format!(
            r#"
            MATCH (i:{label} {{filepath: $filepath}})
            RETURN i.filepath AS filepath, i.hash AS hash
            LIMIT 1
            "#,
            label = self.label()
        ))
        .param("filepath", filepath);

        let mut result = self.graph().execute(query).await?;

        result.next().await?.map(|row| record_from_row(&row)).transpose()
    }

    /// List every stored record, ordered by file path
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_integrity(&self) -> Result<Vec<IntegrityRecord>, StoreError> {
        let query = Query::new(format!(
            r#"
            MATCH (i:{label})
            RETURN i.filepath AS filepath, i.hash AS hash
            ORDER BY i.filepath
            "#,
            label = self.label()
        ));

        let mut result = self.graph().execute(query).await?;
        let mut records = Vec::new();

        while let Some(row) = result.next().await? {
            records.push(record_from_row(&row)?);
        }

        Ok(records)
    }

    /// Count stored records
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_integrity(&self) -> Result<i64, StoreError> {
        let query = Query::new(format!(
            "MATCH (i:{label}) RETURN count(i) AS count",
            label = self.label()
        ));

        let mut result = self.graph().execute(query).await?;
        match result.next().await? {
            Some(row) => row
                .get("count")
                .map_err(|e| StoreError::Query(e.to_string())),
            None => Ok(0),
        }
    }
}

/// Decode a `filepath`/`hash` row, refusing missing or non-string values
pub(crate) fn record_from_row(row: &Row) -> Result<IntegrityRecord, StoreError> {
    let field = |key: &str| {
        row.get::<String>(key)
            .map_err(|e| StoreError::Query(format!("bad {key} column: {e}")))
    };

    Ok(IntegrityRecord {
        filepath: field("filepath")?,
        hash: field("hash")?,
    })
}

#[async_trait]
impl IntegrityStore for Neo4jClient {
    async fn upsert(&self, record: &IntegrityRecord) -> Result<(), StoreError> {
        // MERGE on the key then overwrite, so reruns replace instead of duplicating
        let query = Query::new(format!(
            r#"
            MERGE (i:{label} {{filepath: $filepath}})
            SET i.hash = $hash
            "#,
            label = self.label()
        ))
        .param("filepath", record.filepath.as_str())
        .param("hash", record.hash.as_str());

        self.graph().run(query).await?;
        Ok(())
    }
}
