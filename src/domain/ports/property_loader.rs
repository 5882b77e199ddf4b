//! PropertyLoader port
//!
//! Loads one property file into a `PropertySource`.

use std::path::{Path, PathBuf};

use crate::domain::entities::PropertySource;

pub trait PropertyLoader {
    fn load(&self, path: &Path) -> Result<PropertySource, PropertyLoadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PropertyLoadError {
    /// Callers decide whether this is fatal.
    #[error("property file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read property file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid property line in {path}:{line}: expected 'key=value', got '{content}'")]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

impl PropertyLoadError {
    /// Classify an I/O failure, keeping not-found distinct.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => PropertyLoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => PropertyLoadError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PropertyLoadError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_keeps_not_found_distinct() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = PropertyLoadError::from_io(Path::new("x.properties"), err);
        assert!(err.is_not_found());
        assert!(err.to_string().contains("x.properties"));
    }

    #[test]
    fn from_io_wraps_other_errors() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PropertyLoadError::from_io(Path::new("x.properties"), err);
        assert!(!err.is_not_found());
        assert!(matches!(err, PropertyLoadError::Io { .. }));
    }
}
