//! Generate Module
//!
//! Produces the suggested-sites JSON artifact from property sources.
//!
//! ## Structure
//!
//! - `options` - `GenerateOptions`
//! - `result` - `GenerateResult`
//! - `use_case` - `GenerateUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use suggestedsites::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(FsPropertyLoader, DrawableFinder, FileOutputWriter::new());
//! let result = use_case.execute(&GenerateOptions::new(fallback, package, output))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::{encode_sites, render_depfile, GenerateUseCase};
