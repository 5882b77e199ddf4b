//! `.properties` file loader
//!
//! Format: one `key=value` per line. Lines are trimmed; blank lines and
//! lines starting with `#` are skipped. The first `=` separates key from
//! value and whitespace around it is dropped.

use std::path::Path;

use crate::domain::entities::PropertySource;
use crate::domain::ports::{PropertyLoadError, PropertyLoader};

/// Parse property text. `path` is only used for error messages.
pub fn parse_properties(path: &Path, content: &str) -> Result<PropertySource, PropertyLoadError> {
    let mut source = PropertySource::new(path);

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(PropertyLoadError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                content: line.to_string(),
            });
        };
        source.insert(key.trim_end(), value.trim_start());
    }

    Ok(source)
}

/// Reads property files from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPropertyLoader;

impl FsPropertyLoader {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyLoader for FsPropertyLoader {
    fn load(&self, path: &Path) -> Result<PropertySource, PropertyLoadError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PropertyLoadError::from_io(path, e))?;
        // Tolerate a UTF-8 BOM written by some editors
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        parse_properties(path, content)
    }
}
