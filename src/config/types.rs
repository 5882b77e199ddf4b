//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SitesResult;

use super::loader::{self, ConfigWarning};

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" | "silent" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            atomic_writes: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SitesResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> SitesResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an optional path, apply overrides from the process environment.
    ///
    /// Returns printable warning lines for unknown keys and invalid env values.
    pub fn resolve(path: Option<&Path>) -> SitesResult<(Self, Vec<String>)> {
        Self::resolve_with_env(path, |name| std::env::var(name).ok())
    }

    pub fn resolve_with_env<F>(path: Option<&Path>, lookup: F) -> SitesResult<(Self, Vec<String>)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, unknown) = match path {
            Some(path) => Self::load_with_warnings(path)?,
            None => (Self::default(), Vec::new()),
        };
        let (config, env_warnings) = loader::with_env_overrides(config, lookup);

        let mut warnings: Vec<String> = unknown
            .iter()
            .map(|warning| format!("Warning: {}", warning))
            .collect();
        warnings.extend(env_warnings);
        Ok((config, warnings))
    }
}
