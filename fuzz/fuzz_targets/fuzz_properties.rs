#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use suggestedsites::domain::value_objects::ImageTemplate;
use suggestedsites::{parse_properties, MergedProperties, SiteResolver};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and resolving arbitrary property text must never panic
        if let Ok(source) = parse_properties(Path::new("fuzz.properties"), content) {
            let merged = MergedProperties::from_sources([&source]);
            let template = ImageTemplate::new("org.example.fuzz");
            let _ = SiteResolver::new(&merged, &template).resolve();
        }
    }
});
