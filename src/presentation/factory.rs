//! Use Case Factory
//!
//! Wires infrastructure into the generate use case.

use crate::application::GenerateUseCase;
use crate::config::Config;
use crate::infrastructure::{DrawableFinder, FileOutputWriter, FsPropertyLoader};

/// The generate use case with local file system adapters
pub type ConcreteGenerateUseCase = GenerateUseCase<FsPropertyLoader, DrawableFinder, FileOutputWriter>;

pub fn create_generate_use_case(config: &Config) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(
        FsPropertyLoader::new(),
        DrawableFinder::new(),
        FileOutputWriter::new().with_atomic_writes(config.output.atomic_writes),
    )
}
