//! Neo4j client for integrity storage

use std::sync::Arc;

use neo4rs::{ConfigBuilder, Graph, Query};

use super::StoreError;

/// Node label used when none is configured
pub const DEFAULT_LABEL: &str = "Integrity";

/// Configuration for Neo4j connection
#[derive(Debug, Clone)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
    /// Node label that integrity records are stored under
    pub label: String,
}

impl Neo4jConfig {
    /// Create a new Neo4j configuration
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
            database: None,
            label: DEFAULT_LABEL.to_string(),
        }
    }

    /// Set the database name
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the node label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Check that a label can be spliced into Cypher as a bare identifier
///
/// Labels cannot be passed as query parameters, so anything outside
/// `[A-Za-z_][A-Za-z0-9_]*` is refused.
///
/// # Errors
/// Returns `StoreError::InvalidLabel` if the label is empty or contains
/// other characters.
pub fn validate_label(label: &str) -> Result<(), StoreError> {
    let mut chars = label.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidLabel(label.to_string()))
    }
}

/// Client for interacting with Neo4j
pub struct Neo4jClient {
    graph: Arc<Graph>,
    label: String,
}

impl Neo4jClient {
    /// Connect to Neo4j and ensure the filepath constraint exists
    ///
    /// # Errors
    /// Returns an error if the label is invalid or the connection fails.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, StoreError> {
        validate_label(&config.label)?;

        let mut builder = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password);

        if let Some(db) = &config.database {
            builder = builder.db(db.as_str());
        }

        let neo_config = builder
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let graph = Graph::connect(neo_config).await?;

        let client = Self {
            graph: Arc::new(graph),
            label: config.label.clone(),
        };

        client.ensure_constraints().await?;

        Ok(client)
    }

    /// Create the uniqueness constraint on `filepath` if it doesn't exist
    async fn ensure_constraints(&self) -> Result<(), StoreError> {
        let stmt = format!(
            "CREATE CONSTRAINT {name} IF NOT EXISTS FOR (i:{label}) REQUIRE i.filepath IS UNIQUE",
            name = constraint_name(&self.label),
            label = self.label,
        );
        self.graph.run(Query::new(stmt)).await?;
        Ok(())
    }

    /// Get access to the graph for query modules
    pub(super) fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Node label integrity records live under
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

pub(crate) fn constraint_name(label: &str) -> String {
    format!("{label}_filepath")
}
