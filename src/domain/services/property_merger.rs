//! Property merger
//!
//! Loads a stack of property files and merges them by priority:
//! - inputs are given highest priority first
//! - the fallback is loaded last, so it only fills keys nobody else set
//! - a missing input is skipped, a missing fallback is an error

use std::path::{Path, PathBuf};

use crate::domain::entities::{MergedProperties, PropertySource};
use crate::domain::ports::{
    NoopEventSink, PropertyLoadError, PropertyLoader, ResolveEvent, ResolveEventSink,
};

/// Ordered property sources for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStack {
    inputs: Vec<PathBuf>,
    fallback: PathBuf,
}

impl SourceStack {
    pub fn new(inputs: Vec<PathBuf>, fallback: PathBuf) -> Self {
        Self { inputs, fallback }
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn fallback(&self) -> &Path {
        &self.fallback
    }

    /// Every source path, highest priority first, fallback last.
    pub fn in_priority_order(&self) -> Vec<PathBuf> {
        self.inputs
            .iter()
            .cloned()
            .chain(std::iter::once(self.fallback.clone()))
            .collect()
    }
}

pub struct PropertyMerger<'a> {
    loader: &'a dyn PropertyLoader,
    events: &'a dyn ResolveEventSink,
}

impl<'a> PropertyMerger<'a> {
    pub fn new(loader: &'a dyn PropertyLoader) -> Self {
        Self {
            loader,
            events: &NoopEventSink,
        }
    }

    pub fn with_events(mut self, events: &'a dyn ResolveEventSink) -> Self {
        self.events = events;
        self
    }

    /// Load an optional source. `Ok(None)` when the file does not exist.
    pub fn load_tolerant(&self, path: &Path) -> Result<Option<PropertySource>, PropertyLoadError> {
        match self.loader.load(path) {
            Ok(source) => {
                self.loaded(&source);
                Ok(Some(source))
            }
            Err(e) if e.is_not_found() => {
                self.events.on_event(ResolveEvent::SourceSkipped {
                    path: path.to_path_buf(),
                });
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Load a source that must exist.
    pub fn load_required(&self, path: &Path) -> Result<PropertySource, PropertyLoadError> {
        let source = self.loader.load(path)?;
        self.loaded(&source);
        Ok(source)
    }

    pub fn merge(&self, stack: &SourceStack) -> Result<MergedProperties, PropertyLoadError> {
        let mut sources = Vec::with_capacity(stack.inputs().len() + 1);
        for input in stack.inputs() {
            if let Some(source) = self.load_tolerant(input)? {
                sources.push(source);
            }
        }
        sources.push(self.load_required(stack.fallback())?);

        Ok(MergedProperties::from_sources(&sources))
    }

    fn loaded(&self, source: &PropertySource) {
        self.events.on_event(ResolveEvent::SourceLoaded {
            path: source.path().to_path_buf(),
            keys: source.len(),
        });
    }
}
