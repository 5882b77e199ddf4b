//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{SitesError, SitesResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

pub const ENV_VERBOSITY: &str = "SUGGESTEDSITES_VERBOSITY";
pub const ENV_ATOMIC_WRITES: &str = "SUGGESTEDSITES_ATOMIC_WRITES";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SitesResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse config text. `path` only names the file in warnings and errors.
pub fn parse_with_warnings(content: &str, path: &Path) -> SitesResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SitesError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (SUGGESTEDSITES_* prefix).
///
/// Invalid values come back as warning lines instead of being printed, so
/// the caller decides whether to show them.
pub fn with_env_overrides<F>(config: Config, lookup: F) -> (Config, Vec<String>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut buf = Vec::new();
    let config = with_env_overrides_from(config, lookup, &mut buf);
    let warnings = String::from_utf8_lossy(&buf)
        .lines()
        .map(str::to_string)
        .collect();
    (config, warnings)
}

/// Apply overrides read through `lookup`; warnings go to `writer`.
pub fn with_env_overrides_from<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(value) = lookup(ENV_VERBOSITY) {
        config.output.verbosity = EnvVarValidator::new(ENV_VERBOSITY, &["quiet", "normal", "verbose"])
            .parse_with_writer(&value, Verbosity::parse, config.output.verbosity, writer);
    }

    if let Some(value) = lookup(ENV_ATOMIC_WRITES) {
        config.output.atomic_writes = EnvVarValidator::new(ENV_ATOMIC_WRITES, &["true", "false"])
            .parse_with_writer(&value, parse_bool, config.output.atomic_writes, writer);
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "verbosity", "atomic_writes"];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
