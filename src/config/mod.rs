//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SUGGESTEDSITES_*)
//! 3. Config file passed with `--config`
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    parse_with_warnings, with_env_overrides, with_env_overrides_from, ConfigWarning,
    ENV_ATOMIC_WRITES, ENV_VERBOSITY,
};
pub use types::{Config, OutputConfig, Verbosity};
