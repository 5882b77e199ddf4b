//! Property tests for numbered list lookup and site ordering.

use proptest::prelude::*;

use suggestedsites::domain::value_objects::ImageTemplate;
use suggestedsites::{MergedProperties, PropertySource, SiteResolver};

fn ids() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 0..=6)
}

fn site_source(ids: &[String], gap_at: Option<usize>) -> PropertySource {
    let mut source = PropertySource::new("region.properties");
    for (i, id) in ids.iter().enumerate() {
        let index = match gap_at {
            Some(gap) if i >= gap => i + 1,
            _ => i,
        };
        source.insert(format!("browser.suggestedsites.list.{index}"), id.clone());
        source.insert(format!("browser.suggestedsites.{id}.title"), format!("Title {id}"));
        source.insert(format!("browser.suggestedsites.{id}.url"), format!("https://{id}.example/"));
        source.insert(format!("browser.suggestedsites.{id}.bgcolor"), "#000000");
    }
    source
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sites come out in list-index order, duplicates included.
    #[test]
    fn property_output_follows_list_order(ids in ids()) {
        let merged = MergedProperties::from_sources([&site_source(&ids, None)]);
        let template = ImageTemplate::new("org.example.app");

        let sites = SiteResolver::new(&merged, &template).resolve().unwrap();
        let got: Vec<&str> = sites.iter().map(|s| s.id.as_str()).collect();

        prop_assert_eq!(got, ids.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// PROPERTY: List lookup stops at the first missing index.
    #[test]
    fn property_list_stops_at_first_gap(ids in ids(), gap in 0usize..6) {
        let merged = MergedProperties::from_sources([&site_source(&ids, Some(gap))]);

        let list = merged.get_list("browser.suggestedsites.list");
        let expected: Vec<String> = ids.iter().take(gap).cloned().collect();

        prop_assert_eq!(list, expected);
    }

    /// PROPERTY: Every image URL is derived from the package name and site id.
    #[test]
    fn property_image_url_is_derived(ids in ids()) {
        let merged = MergedProperties::from_sources([&site_source(&ids, None)]);
        let template = ImageTemplate::new("org.example.app");

        for site in SiteResolver::new(&merged, &template).resolve().unwrap() {
            prop_assert_eq!(
                site.imageurl,
                format!("android.resource://org.example.app/drawable/suggestedsites_{}", site.id.as_str())
            );
        }
    }
}
