//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_locator;
pub mod output_writer;
pub mod property_loader;
pub mod resolve_events;

pub use asset_locator::{AssetLocator, AssetLookupError};
pub use output_writer::{OutputWriter, WriteOutcome};
pub use property_loader::{PropertyLoadError, PropertyLoader};
pub use resolve_events::{NoopEventSink, RecordingEventSink, ResolveEvent, ResolveEventSink};
