//! Property tests for the property-file parser.

use std::path::Path;

use proptest::prelude::*;

use suggestedsites::parse_properties;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parser_never_panics(content in "\\PC{0,200}") {
        let _ = parse_properties(Path::new("fuzz.properties"), &content);
    }

    /// PROPERTY: Well-formed `key=value` lines parse to their trimmed pair.
    #[test]
    fn property_well_formed_lines_parse(
        pairs in proptest::collection::btree_map("[a-z][a-z0-9.]{0,12}", "[A-Za-z0-9 :/#=]{0,20}", 0..=8),
    ) {
        let content: String = pairs.iter().map(|(k, v)| format!("{k}={v}\n")).collect();

        let source = parse_properties(Path::new("region.properties"), &content).unwrap();

        prop_assert_eq!(source.len(), pairs.len());
        for (k, v) in source.iter() {
            prop_assert_eq!(Some(v), pairs.get(k).map(|v| v.trim()));
        }
    }
}
