//! Domain Services
//!
//! - `PropertyMerger` - loads and merges the property source stack
//! - `SiteResolver` - reads site lists and builds validated records

mod property_merger;
mod site_resolver;

pub use property_merger::{PropertyMerger, SourceStack};
pub use site_resolver::{ResolveError, SiteResolver};
