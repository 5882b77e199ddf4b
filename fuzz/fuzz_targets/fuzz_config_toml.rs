#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use suggestedsites::config::parse_with_warnings;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Unknown-key capture, line lookup and suggestions must never panic
        if let Ok((_, warnings)) = parse_with_warnings(content, Path::new("fuzz.toml")) {
            for warning in &warnings {
                let _ = warning.to_string();
            }
        }
    }
});
