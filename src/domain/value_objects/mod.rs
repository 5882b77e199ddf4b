//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod image_template;
mod site_id;

pub use hash::ContentHash;
pub use image_template::ImageTemplate;
pub use site_id::{SiteId, SiteIdError};
