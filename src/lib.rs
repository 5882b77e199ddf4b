//! suggestedsites - build-time generator for suggested sites
//!
//! Merges a prioritized stack of locale `region.properties` files (plus a
//! mandatory fallback), resolves the suggested-site lists into validated
//! records, and writes them as a JSON array for the app to read at runtime.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::{Config, Verbosity};
pub use domain::entities::{MergedProperties, PropertySource, SiteList, SiteRecord};
pub use domain::services::{PropertyMerger, ResolveError, SiteResolver, SourceStack};
pub use error::{SitesError, SitesResult};
pub use infrastructure::properties::parse_properties;
