//! Property sources and their priority merge
//!
//! A `PropertySource` is the parsed content of one `.properties` file.
//! `MergedProperties` is the read-only view over a stack of sources, where
//! the first source to define a key keeps it.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Key/value pairs read from a single property file.
///
/// Within one source a later assignment of the same key replaces the
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySource {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PropertySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style helper, mostly for tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Properties merged from several sources, highest priority first.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedProperties {
    values: HashMap<String, String>,
}

impl MergedProperties {
    /// Merge sources given in descending priority.
    ///
    /// A key already taken by an earlier source is never overwritten.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = &'a PropertySource>) -> Self {
        let mut values: HashMap<String, String> = HashMap::new();
        for source in sources {
            for (key, value) in source.iter() {
                values
                    .entry(key.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Read the ordered list stored under `prefix.0`, `prefix.1`, ...
    ///
    /// The list ends at the first missing index.
    pub fn get_list(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim_end_matches('.');
        (0usize..)
            .map_while(|index| self.get(&format!("{}.{}", prefix, index)))
            .map(str::to_string)
            .collect()
    }

    /// Collect the direct children of `prefix`, keyed by their suffix.
    ///
    /// `a.b.title` is a child of `a.b`; `a.b.c.title` is not.
    pub fn get_namespace(&self, prefix: &str) -> BTreeMap<String, String> {
        let prefix = format!("{}.", prefix.trim_end_matches('.'));
        self.values
            .iter()
            .filter_map(|(key, value)| {
                let suffix = key.strip_prefix(&prefix)?;
                if suffix.is_empty() || suffix.contains('.') {
                    return None;
                }
                Some((suffix.to_string(), value.clone()))
            })
            .collect()
    }
}
