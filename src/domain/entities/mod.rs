//! Domain Entities
//!
//! - `PropertySource` / `MergedProperties` - parsed property files and their priority merge
//! - `SiteRecord` - a resolved suggested site
//! - `SiteList` - a named list of site identifiers with per-list defaults

mod properties;
mod site;

pub use properties::{MergedProperties, PropertySource};
pub(crate) use site::RESERVED_KEYS;
pub use site::{SiteDefaults, SiteList, SiteRecord, REQUIRED_KEYS, SITE_NAMESPACE};
