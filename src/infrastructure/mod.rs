//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `FsPropertyLoader` - reads `.properties` files
//! - `DrawableFinder` - globs resource directories for drawables
//! - `FileOutputWriter` - writes the artifact, skipping no-op writes

pub mod assets;
pub mod fs;
pub mod properties;

pub use assets::DrawableFinder;
pub use fs::FileOutputWriter;
pub use properties::FsPropertyLoader;
