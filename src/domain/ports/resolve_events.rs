//! Resolve Event Port
//!
//! Lets the generate pipeline report progress without knowing how (or
//! whether) it gets displayed.

use std::path::PathBuf;

/// Event emitted while merging properties and resolving sites
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveEvent {
    /// A property source was merged
    SourceLoaded { path: PathBuf, keys: usize },

    /// An optional property source did not exist
    SourceSkipped { path: PathBuf },

    /// About to read the configured site lists
    ListsStarted { names: Vec<String> },

    /// One list was read
    ListRead { name: String, ids: Vec<String> },

    /// Drawables backing a site were found
    DrawablesFound {
        id: String,
        root: PathBuf,
        matches: Vec<PathBuf>,
    },
}

/// Receiver for resolve events
pub trait ResolveEventSink {
    fn on_event(&self, event: ResolveEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ResolveEventSink for NoopEventSink {
    fn on_event(&self, _event: ResolveEvent) {}
}

/// Collects events in memory (for testing)
#[derive(Default)]
pub struct RecordingEventSink {
    events: std::cell::RefCell<Vec<ResolveEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ResolveEvent> {
        self.events.borrow().clone()
    }
}

impl ResolveEventSink for RecordingEventSink {
    fn on_event(&self, event: ResolveEvent) {
        self.events.borrow_mut().push(event);
    }
}
