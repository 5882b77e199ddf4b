//! Property file loading

mod dot_properties;

pub use dot_properties::{parse_properties, FsPropertyLoader};
