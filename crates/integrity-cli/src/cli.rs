//! Command-line argument types

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use integrity_core::store::neo4j::DEFAULT_LABEL;
use integrity_core::Neo4jConfig;

#[derive(Parser)]
#[command(name = "integrity")]
#[command(author, version, about = "Subresource Integrity hashes for static assets", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hash every .css and .js file under a directory and store the results in Neo4j
    Save {
        /// Static asset directory to scan
        path: PathBuf,

        #[command(flatten)]
        neo4j: Neo4jArgs,
    },

    /// Hash every .css and .js file under a directory and print the records
    Hash {
        /// Static asset directory to scan
        path: PathBuf,
    },

    /// Print the stored hash for one file
    Lookup {
        /// Absolute path of the asset, as it was stored
        filepath: String,

        #[command(flatten)]
        neo4j: Neo4jArgs,
    },
}

/// Neo4j connection flags shared by the commands that touch the store
#[derive(Args, Debug, Clone)]
pub struct Neo4jArgs {
    /// Neo4j connection URI
    #[arg(long, default_value = "bolt://localhost:7687")]
    pub neo4j_uri: String,

    /// Neo4j username
    #[arg(long, default_value = "neo4j")]
    pub neo4j_user: String,

    /// Neo4j password
    #[arg(long)]
    pub neo4j_password: String,

    /// Neo4j database name
    #[arg(long)]
    pub neo4j_database: Option<String>,

    /// Node label that integrity records are stored under
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub label: String,
}

impl Neo4jArgs {
    /// Build the connection configuration
    #[must_use]
    pub fn to_config(&self) -> Neo4jConfig {
        let config = Neo4jConfig::new(&self.neo4j_uri, &self.neo4j_user, &self.neo4j_password)
            .with_label(&self.label);

        match &self.neo4j_database {
            Some(db) => config.with_database(db),
            None => config,
        }
    }
}
