//! Resource asset lookup

mod drawable_finder;

pub use drawable_finder::DrawableFinder;
