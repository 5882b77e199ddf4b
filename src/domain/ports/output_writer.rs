//! OutputWriter port
//!
//! Writes the generated artifact and reports whether anything changed.

use std::path::Path;

use crate::domain::value_objects::ContentHash;

/// What happened at the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// A file was already present before writing
    pub existed: bool,
    /// Content differs from what was there (or nothing was there)
    pub updated: bool,
    /// Hash of the content now at the destination
    pub hash: ContentHash,
}

pub trait OutputWriter {
    fn write(&self, path: &Path, content: &[u8]) -> std::io::Result<WriteOutcome>;
}
