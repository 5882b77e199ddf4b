//! Drawable finder
//!
//! Implements `AssetLocator` with the `ignore` crate: a whitelist override
//! built from the glob selects files while walking the resource root.
//! Globs use gitignore syntax and a pattern containing `/` is anchored at
//! the root. Symlinks are followed: build trees link resources in from the
//! source directory.

use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::domain::ports::{AssetLocator, AssetLookupError};

#[derive(Debug, Clone, Copy, Default)]
pub struct DrawableFinder;

impl DrawableFinder {
    pub fn new() -> Self {
        Self
    }
}

impl AssetLocator for DrawableFinder {
    fn find(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, AssetLookupError> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let invalid = |e: ignore::Error| AssetLookupError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        };
        let mut builder = OverrideBuilder::new(root);
        builder.add(pattern).map_err(invalid)?;
        let overrides = builder.build().map_err(invalid)?;

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .hidden(true)
            .follow_links(true)
            .overrides(overrides)
            .build();

        let mut matches = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Dangling symlink
                Err(e) if is_not_found(&e) => continue,
                Err(e) => {
                    return Err(AssetLookupError::Walk {
                        root: root.to_path_buf(),
                        message: e.to_string(),
                    })
                }
            };
            if entry.path().is_file() {
                matches.push(entry.into_path());
            }
        }
        matches.sort();
        Ok(matches)
    }
}

fn is_not_found(err: &ignore::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}
