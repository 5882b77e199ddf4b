//! Image URL and drawable templates
//!
//! The two templates must stay in sync: the URL names a drawable resource and
//! the glob finds the file backing it.

use super::SiteId;

/// Derives a site's `imageurl` and its drawable glob from the package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTemplate {
    package_name: String,
}

impl ImageTemplate {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// `android.resource://<package>/drawable/suggestedsites_<id>`
    pub fn image_url(&self, id: &SiteId) -> String {
        format!(
            "android.resource://{}/drawable/suggestedsites_{}",
            self.package_name, id
        )
    }

    /// `drawable*/suggestedsites_<id>.*`, relative to the resource root.
    pub fn drawable_pattern(&self, id: &SiteId) -> String {
        format!("drawable*/suggestedsites_{}.*", id)
    }
}
