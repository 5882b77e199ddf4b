//! Generate Options

use std::path::PathBuf;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Property files, highest priority first
    pub inputs: Vec<PathBuf>,
    /// Mandatory lowest-priority property file
    pub fallback: PathBuf,
    /// Android package name used in image URLs
    pub package_name: String,
    /// Resource directory to check for drawables (check skipped when unset)
    pub resources: Option<PathBuf>,
    /// Destination of the JSON artifact
    pub output: PathBuf,
    /// Optional make-style dependency file
    pub depfile: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(
        fallback: impl Into<PathBuf>,
        package_name: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inputs: Vec::new(),
            fallback: fallback.into(),
            package_name: package_name.into(),
            resources: None,
            output: output.into(),
            depfile: None,
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_resources(mut self, resources: impl Into<PathBuf>) -> Self {
        self.resources = Some(resources.into());
        self
    }

    pub fn with_depfile(mut self, depfile: impl Into<PathBuf>) -> Self {
        self.depfile = Some(depfile.into());
        self
    }
}
