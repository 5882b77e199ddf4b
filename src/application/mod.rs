//! Application Layer
//!
//! Use cases that wire domain services to infrastructure.

pub mod generate;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
