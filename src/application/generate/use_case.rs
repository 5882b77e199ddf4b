//! Generate Use Case
//!
//! Orchestrates one run:
//! 1. Check the fallback source exists
//! 2. Merge property sources by priority
//! 3. Resolve and validate the site lists
//! 4. Encode and write the JSON artifact (and optional depfile)
//!
//! Any failure aborts the run before the artifact is written.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::SiteRecord;
use crate::domain::ports::{
    AssetLocator, NoopEventSink, OutputWriter, PropertyLoader, ResolveEventSink,
};
use crate::domain::services::{PropertyMerger, SiteResolver, SourceStack};
use crate::domain::value_objects::ImageTemplate;
use crate::error::{SitesError, SitesResult};

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case, parameterized by its ports.
pub struct GenerateUseCase<PL, AL, OW>
where
    PL: PropertyLoader,
    AL: AssetLocator,
    OW: OutputWriter,
{
    loader: PL,
    locator: AL,
    writer: OW,
}

impl<PL, AL, OW> GenerateUseCase<PL, AL, OW>
where
    PL: PropertyLoader,
    AL: AssetLocator,
    OW: OutputWriter,
{
    pub fn new(loader: PL, locator: AL, writer: OW) -> Self {
        Self {
            loader,
            locator,
            writer,
        }
    }

    pub fn execute(&self, options: &GenerateOptions) -> SitesResult<GenerateResult> {
        self.execute_with_events(options, &NoopEventSink)
    }

    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        events: &dyn ResolveEventSink,
    ) -> SitesResult<GenerateResult> {
        if !options.fallback.is_file() {
            return Err(SitesError::FallbackMissing {
                path: options.fallback.clone(),
            });
        }

        let stack = SourceStack::new(options.inputs.clone(), options.fallback.clone());
        let properties = PropertyMerger::new(&self.loader)
            .with_events(events)
            .merge(&stack)?;

        let template = ImageTemplate::new(options.package_name.as_str());
        let mut resolver = SiteResolver::new(&properties, &template).with_events(events);
        if let Some(resources) = &options.resources {
            resolver = resolver.with_assets(std::path::absolute(resources)?, &self.locator);
        }
        let sites = resolver.resolve()?;

        if sites.is_empty() {
            return Err(SitesError::NoSites {
                searched: stack.in_priority_order(),
            });
        }

        let json = encode_sites(&sites)?;
        let outcome = self
            .writer
            .write(&options.output, json.as_bytes())
            .map_err(|source| SitesError::Write {
                path: options.output.clone(),
                source,
            })?;

        // Inputs that were absent this run are left out; they were never read.
        let dependencies: BTreeSet<PathBuf> = stack
            .in_priority_order()
            .into_iter()
            .filter(|path| path.is_file())
            .collect();

        if let Some(depfile) = &options.depfile {
            let content = render_depfile(&options.output, &dependencies);
            self.writer
                .write(depfile, content.as_bytes())
                .map_err(|source| SitesError::Write {
                    path: depfile.clone(),
                    source,
                })?;
        }

        Ok(GenerateResult {
            output: options.output.clone(),
            sites,
            outcome,
            dependencies,
        })
    }
}

/// Encode records as a compact JSON array, in order.
pub fn encode_sites(sites: &[SiteRecord]) -> SitesResult<String> {
    Ok(serde_json::to_string(sites)?)
}

/// `target: dep dep ...` in make syntax.
pub fn render_depfile(target: &Path, dependencies: &BTreeSet<PathBuf>) -> String {
    let mut line = escape_make_path(target);
    line.push(':');
    for dep in dependencies {
        line.push(' ');
        line.push_str(&escape_make_path(dep));
    }
    line.push('\n');
    line
}

fn escape_make_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace('$', "$$")
        .replace(' ', "\\ ")
        .replace('#', "\\#")
}
