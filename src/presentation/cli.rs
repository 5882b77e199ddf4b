//! CLI Argument Parsing
//!
//! Inputs are positional, highest priority first. The fallback is always
//! loaded last.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Verbosity;

/// Generate suggestedsites.json from prioritized region.properties files
#[derive(Parser, Debug)]
#[command(name = "suggestedsites")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Property files, in order of priority (highest first)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Fallback property file; must exist and is loaded last
    #[arg(long, value_name = "PATH")]
    pub fallback: PathBuf,

    /// Android package name used to build image URLs
    #[arg(long, value_name = "NAME")]
    pub android_package_name: String,

    /// Android resource directory to find drawables in
    #[arg(long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Where to write the JSON artifact
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Write a make-style dependency file
    #[arg(long, value_name = "PATH")]
    pub depfile: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON status event instead of text
    #[arg(long)]
    pub json: bool,

    /// Be verbose
    #[arg(short, long, conflicts_with = "silent")]
    pub verbose: bool,

    /// Be silent
    #[arg(short, long)]
    pub silent: bool,
}

impl Cli {
    /// Verbosity requested on the command line, if any.
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.silent {
            Some(Verbosity::Quiet)
        } else if self.verbose {
            Some(Verbosity::Verbose)
        } else {
            None
        }
    }
}
