//! Generate Result

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::entities::SiteRecord;
use crate::domain::ports::WriteOutcome;

/// Result of a successful generate run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Where the artifact was written
    pub output: PathBuf,
    /// Resolved sites, in output order
    pub sites: Vec<SiteRecord>,
    /// What happened at the destination
    pub outcome: WriteOutcome,
    /// Files the build system should treat as inputs of the artifact
    pub dependencies: BTreeSet<PathBuf>,
}

impl GenerateResult {
    pub fn is_updated(&self) -> bool {
        self.outcome.updated
    }

    pub fn restricted_count(&self) -> usize {
        self.sites.iter().filter(|s| s.restricted).count()
    }
}
