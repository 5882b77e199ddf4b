//! Test environment for isolated CLI runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the suggestedsites binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp directory holding property files, resources and output.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file (creating parents) and return its path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap_or_default()
    }

    /// Run the binary with `args`, from the temp root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_suggestedsites"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("SUGGESTEDSITES_VERBOSITY")
            .env_remove("SUGGESTEDSITES_ATOMIC_WRITES");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        output_to_result(cmd.output().expect("Failed to execute suggestedsites"))
    }

    /// Run with the standard required flags, relative to the temp root.
    pub fn generate(&self, inputs: &[&str], fallback: &str, extra: &[&str]) -> TestResult {
        let mut args: Vec<&str> = inputs.to_vec();
        args.extend([
            "--fallback",
            fallback,
            "--android-package-name",
            PACKAGE,
            "-o",
            OUTPUT,
        ]);
        args.extend(extra);
        self.run(&args)
    }

    pub fn output_exists(&self) -> bool {
        self.path(OUTPUT).exists()
    }

    pub fn output_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read(OUTPUT)).expect("output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Relative output path used by `TestEnv::generate`
pub const OUTPUT: &str = "raw/suggestedsites.json";

/// Package name used by `TestEnv::generate`
pub const PACKAGE: &str = "org.mozilla.fennec";

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Site ids in output order
pub fn site_ids(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .expect("output is not a JSON array")
        .iter()
        .map(|site| {
            let url = site["imageurl"].as_str().unwrap_or_default();
            url.rsplit("suggestedsites_").next().unwrap_or_default().to_string()
        })
        .collect()
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
