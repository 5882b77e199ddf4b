//! AssetLocator port
//!
//! Finds resource files matching a glob. Files are only checked for
//! presence, never read.

use std::path::{Path, PathBuf};

pub trait AssetLocator {
    /// Return matching files under `root`, sorted.
    fn find(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, AssetLookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AssetLookupError {
    #[error("invalid asset pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to scan resources in {root}: {message}")]
    Walk { root: PathBuf, message: String },
}
