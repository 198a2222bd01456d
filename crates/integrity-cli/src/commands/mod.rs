//! CLI commands

pub mod hash;
pub mod lookup;
pub mod save;

use std::path::{Path, PathBuf};

/// Absolute form of `path`, so stored keys don't depend on the working directory
pub(crate) fn absolute_root(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
