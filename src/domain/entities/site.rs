//! Suggested site records and the lists that reference them

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::SiteId;

/// Property keys every site namespace must define.
pub const REQUIRED_KEYS: [&str; 3] = ["title", "url", "bgcolor"];

/// Keys that are never taken from properties.
pub(crate) const RESERVED_KEYS: [&str; 2] = ["imageurl", "restricted"];

/// Namespace prefix under which site properties live.
pub const SITE_NAMESPACE: &str = "browser.suggestedsites";

/// Field values a list contributes to every record it produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteDefaults {
    pub restricted: bool,
}

/// One named, ordered list of site identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteList {
    pub name: &'static str,
    pub defaults: SiteDefaults,
}

impl SiteList {
    pub const DEFAULT: SiteList = SiteList {
        name: "browser.suggestedsites.list",
        defaults: SiteDefaults { restricted: false },
    };

    pub const RESTRICTED: SiteList = SiteList {
        name: "browser.suggestedsites.restricted.list",
        defaults: SiteDefaults { restricted: true },
    };

    /// Lists in output order. The default list always comes first.
    pub const ALL: [SiteList; 2] = [SiteList::DEFAULT, SiteList::RESTRICTED];
}

/// A fully resolved site, ready for serialization.
///
/// `restricted` is omitted from JSON when false; consumers treat absence
/// as false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteRecord {
    #[serde(skip_serializing_if = "is_false")]
    pub restricted: bool,
    pub title: String,
    pub url: String,
    pub bgcolor: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
    pub imageurl: String,
    #[serde(skip)]
    pub id: SiteId,
}

fn is_false(value: &bool) -> bool {
    !*value
}
