//! integrity-cli library
//!
//! Exposes the argument types, logging setup and commands so they can be
//! exercised from tests.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands, Neo4jArgs};
