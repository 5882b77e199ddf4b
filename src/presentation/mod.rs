//! Presentation Layer
//!
//! - `cli` - argument parsing (clap)
//! - `factory` - builds the generate use case with local adapters
//! - `output` - text and JSON rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::create_generate_use_case;
