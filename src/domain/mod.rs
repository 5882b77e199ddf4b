//! Domain Layer
//!
//! Pure logic for merging property sources and resolving suggested sites.
//!
//! ## Structure
//!
//! - `entities/` - property sources, merged properties, site records and lists
//! - `value_objects/` - site identifiers, image templates, content hashes
//! - `services/` - property merging and site resolution
//! - `ports/` - interfaces implemented by infrastructure
//!
//! All file access goes through the ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
