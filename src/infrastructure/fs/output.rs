//! Output file writer
//!
//! Skips the write when the destination already holds identical content,
//! so unchanged artifacts keep their timestamps across build re-runs.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::{OutputWriter, WriteOutcome};
use crate::domain::value_objects::ContentHash;

#[derive(Debug, Clone, Copy)]
pub struct FileOutputWriter {
    atomic: bool,
}

impl Default for FileOutputWriter {
    fn default() -> Self {
        Self { atomic: true }
    }
}

impl FileOutputWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write through a temp file + rename (default) or directly.
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}

impl OutputWriter for FileOutputWriter {
    fn write(&self, path: &Path, content: &[u8]) -> std::io::Result<WriteOutcome> {
        let hash = ContentHash::from_bytes(content);

        let existing = match std::fs::read(path) {
            Ok(bytes) => Some(ContentHash::from_bytes(&bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e),
        };
        let existed = existing.is_some();
        if existing.as_ref() == Some(&hash) {
            return Ok(WriteOutcome {
                existed,
                updated: false,
                hash,
            });
        }

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        if self.atomic {
            atomic_write(parent, path, content)?;
        } else {
            std::fs::write(path, content)?;
        }

        Ok(WriteOutcome {
            existed,
            updated: true,
            hash,
        })
    }
}

/// Write to a temp file next to `path`, then rename over it.
fn atomic_write(dir: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
