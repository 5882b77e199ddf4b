//! Site resolver
//!
//! Turns the site lists in merged properties into validated records:
//! - lists are read in fixed order (default, then restricted)
//! - every listed site must define `title`, `url` and `bgcolor`
//! - `imageurl` always comes from the image template
//! - with a resource root, every site needs at least one drawable

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::entities::{
    MergedProperties, SiteList, SiteRecord, REQUIRED_KEYS, RESERVED_KEYS, SITE_NAMESPACE,
};
use crate::domain::ports::{
    AssetLocator, AssetLookupError, NoopEventSink, ResolveEvent, ResolveEventSink,
};
use crate::domain::value_objects::{ImageTemplate, SiteId, SiteIdError};

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("site '{id}' from {list} is missing required properties: {} (expected under '{namespace}.*')", .missing.join(", "))]
    MissingKeys {
        list: String,
        id: String,
        namespace: String,
        missing: Vec<String>,
    },

    #[error("invalid entry {list}.{index}: {source}")]
    InvalidId {
        list: String,
        index: usize,
        #[source]
        source: SiteIdError,
    },

    #[error("could not find drawable in '{root}' for '{id}' (pattern '{pattern}')")]
    MissingDrawable {
        root: PathBuf,
        id: String,
        pattern: String,
    },

    #[error(transparent)]
    AssetLookup(#[from] AssetLookupError),
}

/// Resource root plus the locator used to search it.
pub struct AssetCheck<'a> {
    root: PathBuf,
    locator: &'a dyn AssetLocator,
}

pub struct SiteResolver<'a> {
    properties: &'a MergedProperties,
    template: &'a ImageTemplate,
    assets: Option<AssetCheck<'a>>,
    events: &'a dyn ResolveEventSink,
}

impl<'a> SiteResolver<'a> {
    pub fn new(properties: &'a MergedProperties, template: &'a ImageTemplate) -> Self {
        Self {
            properties,
            template,
            assets: None,
            events: &NoopEventSink,
        }
    }

    /// Require a drawable under `root` for every resolved site.
    pub fn with_assets(mut self, root: PathBuf, locator: &'a dyn AssetLocator) -> Self {
        self.assets = Some(AssetCheck { root, locator });
        self
    }

    pub fn with_events(mut self, events: &'a dyn ResolveEventSink) -> Self {
        self.events = events;
        self
    }

    /// Resolve the default list, then the restricted list.
    pub fn resolve(&self) -> Result<Vec<SiteRecord>, ResolveError> {
        self.resolve_lists(&SiteList::ALL)
    }

    pub fn resolve_lists(&self, lists: &[SiteList]) -> Result<Vec<SiteRecord>, ResolveError> {
        self.events.on_event(ResolveEvent::ListsStarted {
            names: lists.iter().map(|l| l.name.to_string()).collect(),
        });

        let mut sites = Vec::new();
        for list in lists {
            let names = self.properties.get_list(list.name);
            self.events.on_event(ResolveEvent::ListRead {
                name: list.name.to_string(),
                ids: names.clone(),
            });

            for (index, raw) in names.iter().enumerate() {
                let id = SiteId::new(raw).map_err(|source| ResolveError::InvalidId {
                    list: list.name.to_string(),
                    index,
                    source,
                })?;
                let record = self.build_record(list, id)?;
                self.check_drawable(&record.id)?;
                sites.push(record);
            }
        }
        Ok(sites)
    }

    fn build_record(&self, list: &SiteList, id: SiteId) -> Result<SiteRecord, ResolveError> {
        let namespace = format!("{}.{}", SITE_NAMESPACE, id);
        let mut fields = self.properties.get_namespace(&namespace);

        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| !fields.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ResolveError::MissingKeys {
                list: list.name.to_string(),
                id: id.to_string(),
                namespace,
                missing,
            });
        }

        let mut take = |key: &str| fields.remove(key).unwrap_or_default();
        let title = take("title");
        let url = take("url");
        let bgcolor = take("bgcolor");

        let extra: BTreeMap<String, String> = fields
            .into_iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .collect();

        Ok(SiteRecord {
            restricted: list.defaults.restricted,
            title,
            url,
            bgcolor,
            extra,
            imageurl: self.template.image_url(&id),
            id,
        })
    }

    fn check_drawable(&self, id: &SiteId) -> Result<(), ResolveError> {
        let Some(check) = &self.assets else {
            return Ok(());
        };

        let pattern = self.template.drawable_pattern(id);
        let matches = check.locator.find(&check.root, &pattern)?;
        if matches.is_empty() {
            return Err(ResolveError::MissingDrawable {
                root: check.root.clone(),
                id: id.to_string(),
                pattern,
            });
        }

        self.events.on_event(ResolveEvent::DrawablesFound {
            id: id.to_string(),
            root: check.root.clone(),
            matches,
        });
        Ok(())
    }
}
