//! File system output

mod output;

pub use output::FileOutputWriter;
