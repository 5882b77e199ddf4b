//! Failure paths: each exits 1 and leaves no output behind

mod common;

use common::*;

#[test]
fn missing_fallback_fails() {
    let env = TestEnv::new();

    let result = env.generate(&[], "en-US/region.properties", &[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("is not a file"), "stderr: {}", result.stderr);
    assert!(!env.output_exists());
}

#[test]
fn fallback_directory_fails() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.path("en-US")).unwrap();

    let result = env.generate(&[], "en-US", &[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("is not a file"), "stderr: {}", result.stderr);
}

#[test]
fn missing_required_key_names_site_and_key() {
    let env = TestEnv::new();
    env.write("en-US/region.properties", MISSING_URL);

    let result = env.generate(&[], "en-US/region.properties", &[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("mozilla"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("url"), "stderr: {}", result.stderr);
    assert!(!env.output_exists());
}

#[test]
fn no_sites_lists_searched_files() {
    let env = TestEnv::new();
    env.write("en-US/region.properties", "# nothing here\n");

    let result = env.generate(&["fr/region.properties"], "en-US/region.properties", &[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("no sites defined"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("fr/region.properties"));
    assert!(result.stderr.contains("en-US/region.properties"));
    assert!(!env.output_exists());
}

#[test]
fn malformed_line_reports_location() {
    let env = TestEnv::new();
    env.write(
        "en-US/region.properties",
        "browser.suggestedsites.list.0=mozilla\nthis line has no separator\n",
    );

    let result = env.generate(&[], "en-US/region.properties", &[]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("region.properties:2"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("this line has no separator"));
}

#[test]
fn failure_keeps_previous_output() {
    let env = TestEnv::new();
    env.write("en-US/region.properties", SINGLE_SITE);
    assert!(env.generate(&[], "en-US/region.properties", &[]).success);
    let before = env.read(OUTPUT);

    env.write("en-US/region.properties", MISSING_URL);
    let result = env.generate(&[], "en-US/region.properties", &[]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(env.read(OUTPUT), before);
}

#[test]
fn json_mode_reports_error_event() {
    let env = TestEnv::new();

    let result = env.generate(&[], "en-US/region.properties", &["--json"]);

    assert_eq!(result.exit_code, 1);
    let event: serde_json::Value =
        serde_json::from_str(result.stdout.trim()).expect("error event on stdout");
    assert_eq!(event["event"], "error");
    assert!(event["message"].as_str().unwrap().contains("is not a file"));
}

#[test]
fn missing_required_flag_is_usage_error() {
    let env = TestEnv::new();
    env.write("en-US/region.properties", SINGLE_SITE);

    let result = env.run(&["--fallback", "en-US/region.properties", "-o", OUTPUT]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("--android-package-name"));
}
