//! Error types for suggestedsites
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{AssetLookupError, PropertyLoadError};
use crate::domain::services::ResolveError;

/// Result type alias for suggestedsites operations
pub type SitesResult<T> = Result<T, SitesError>;

/// Top-level error for a generation run.
///
/// Every variant is fatal: the run aborts and nothing is written.
#[derive(Error, Debug)]
pub enum SitesError {
    /// The mandatory fallback source is not a regular file
    #[error("fallback path {path} is not a file")]
    FallbackMissing { path: PathBuf },

    /// A property source exists but could not be read or parsed
    #[error(transparent)]
    Load(#[from] PropertyLoadError),

    /// A listed site failed validation
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Neither list produced a site
    #[error("no sites defined: searched in [{}]", display_paths(.searched))]
    NoSites { searched: Vec<PathBuf> },

    /// Site records could not be encoded
    #[error("failed to encode sites as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Output or dependency file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AssetLookupError> for SitesError {
    fn from(err: AssetLookupError) -> Self {
        SitesError::Resolve(ResolveError::from(err))
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
