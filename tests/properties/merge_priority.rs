//! Property tests for priority merging.

use proptest::prelude::*;

use suggestedsites::{MergedProperties, PropertySource};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-c]\\.[a-c]").unwrap()
}

fn source() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((key(), "[a-z0-9]{0,6}"), 0..=6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every key resolves to its value in the first source that defines it.
    #[test]
    fn property_first_definition_wins(sources in proptest::collection::vec(source(), 1..=4)) {
        let built: Vec<PropertySource> = sources
            .iter()
            .enumerate()
            .map(|(i, pairs)| {
                let mut source = PropertySource::new(format!("{i}.properties"));
                for (k, v) in pairs {
                    source.insert(k.clone(), v.clone());
                }
                source
            })
            .collect();

        let merged = MergedProperties::from_sources(&built);

        for source in &built {
            for (k, _) in source.iter() {
                let expected = built.iter().find_map(|s| s.iter().find(|(sk, _)| *sk == k).map(|(_, v)| v));
                prop_assert_eq!(merged.get(k), expected);
            }
        }
    }

    /// PROPERTY: The merged key set is the union of every source's keys.
    #[test]
    fn property_merge_keeps_every_key(sources in proptest::collection::vec(source(), 0..=4)) {
        let built: Vec<PropertySource> = sources
            .iter()
            .map(|pairs| {
                let mut source = PropertySource::new("in.properties");
                for (k, v) in pairs {
                    source.insert(k.clone(), v.clone());
                }
                source
            })
            .collect();

        let merged = MergedProperties::from_sources(&built);
        let union: std::collections::BTreeSet<&str> =
            built.iter().flat_map(|s| s.iter().map(|(k, _)| k)).collect();

        prop_assert_eq!(merged.len(), union.len());
    }
}
