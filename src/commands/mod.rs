//! Command runners

pub mod generate;
