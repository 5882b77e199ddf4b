//! Output Rendering
//!
//! Human-readable text (gated by verbosity) or a single JSON status event.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::application::GenerateResult;
use crate::config::Verbosity;
use crate::domain::ports::{ResolveEvent, ResolveEventSink};

/// Prints resolve progress when verbose.
///
/// `on_event` cannot fail, so the first write error is kept and returned
/// by `finish`. Later events are dropped once a write has failed.
pub struct ConsoleEventSink<W: Write> {
    verbosity: Verbosity,
    out: RefCell<W>,
    error: RefCell<Option<io::Error>>,
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(verbosity: Verbosity, out: W) -> Self {
        Self {
            verbosity,
            out: RefCell::new(out),
            error: RefCell::new(None),
        }
    }

    /// Hand back the writer, or the first error hit while printing.
    pub fn finish(self) -> io::Result<W> {
        match self.error.into_inner() {
            Some(err) => Err(err),
            None => Ok(self.out.into_inner()),
        }
    }
}

impl<W: Write> ResolveEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: ResolveEvent) {
        if self.verbosity < Verbosity::Verbose || self.error.borrow().is_some() {
            return;
        }
        let mut out = self.out.borrow_mut();
        let written = match event {
            ResolveEvent::SourceLoaded { path, keys } => {
                writeln!(out, "Loaded {} properties from {}", keys, path.display())
            }
            ResolveEvent::SourceSkipped { path } => {
                writeln!(out, "Skipping missing input {}", path.display())
            }
            ResolveEvent::ListsStarted { names } => writeln!(
                out,
                "Reading {} suggested site lists: {}",
                names.len(),
                names.join(", ")
            ),
            ResolveEvent::ListRead { name, ids } => writeln!(
                out,
                "Reading {} suggested sites from {}: {}",
                ids.len(),
                name,
                ids.join(", ")
            ),
            ResolveEvent::DrawablesFound { id, root, matches } => writeln!(
                out,
                "Found {} drawables in '{}' for '{}': {}",
                matches.len(),
                root.display(),
                id,
                matches
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };
        if let Err(err) = written {
            *self.error.borrow_mut() = Some(err);
        }
    }
}

/// Final status line, e.g. `/abs/raw/suggestedsites.json updated`.
pub fn render_status(out: &mut impl Write, result: &GenerateResult, output: &Path) -> io::Result<()> {
    if result.is_updated() {
        writeln!(out, "{} updated", output.display())
    } else {
        writeln!(out, "{} already up-to-date", output.display())
    }
}

/// JSON status event for `--json`.
#[derive(Debug, Serialize)]
pub struct GenerateEvent<'a> {
    pub event: &'static str,
    pub status: &'static str,
    pub output: String,
    pub sites: usize,
    pub restricted: usize,
    pub hash: &'a str,
    pub dependencies: Vec<String>,
}

impl<'a> GenerateEvent<'a> {
    pub fn from_result(result: &'a GenerateResult, output: &Path) -> Self {
        Self {
            event: "generate",
            status: if result.is_updated() { "updated" } else { "unchanged" },
            output: output.display().to_string(),
            sites: result.sites.len(),
            restricted: result.restricted_count(),
            hash: result.outcome.hash.as_str(),
            dependencies: result
                .dependencies
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

/// Error event for `--json`.
#[derive(Debug, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
        }
    }
}

/// Write one event as a JSON line.
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}
