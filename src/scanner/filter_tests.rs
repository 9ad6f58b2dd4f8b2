use std::path::Path;

use super::*;

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn default_include_matches_baselines() {
    let filter = GlobFilter::new(&patterns(&[DEFAULT_INCLUDE_PATTERN]), &[]).unwrap();

    assert!(filter.should_include(Path::new("testdata/java_library.baseline")));
    assert!(filter.should_include(Path::new("go.baseline")));
    assert!(!filter.should_include(Path::new("testdata/java_library.yaml")));
}

#[test]
fn include_matches_file_name() {
    let filter = GlobFilter::new(&patterns(&["java_*.baseline"]), &[]).unwrap();

    assert!(filter.should_include(Path::new("deep/dir/java_library.baseline")));
    assert!(!filter.should_include(Path::new("deep/dir/go_library.baseline")));
}

#[test]
fn empty_include_accepts_all() {
    let filter = GlobFilter::new(&[], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("readme.txt")));
}

#[test]
fn exclude_patterns_win() {
    let filter = GlobFilter::new(
        &patterns(&[DEFAULT_INCLUDE_PATTERN]),
        &patterns(&["**/old/**", "**/*_deprecated.baseline"]),
    )
    .unwrap();

    assert!(filter.should_include(Path::new("testdata/java_library.baseline")));
    assert!(!filter.should_include(Path::new("testdata/old/java_library.baseline")));
    assert!(!filter.should_include(Path::new("testdata/go_deprecated.baseline")));
}

#[test]
fn invalid_include_pattern() {
    let result = GlobFilter::new(&patterns(&["[invalid"]), &[]);
    assert!(matches!(
        result,
        Err(CheckError::InvalidPattern { ref pattern, .. }) if pattern == "[invalid"
    ));
}

#[test]
fn invalid_exclude_pattern() {
    let result = GlobFilter::new(&[], &patterns(&["[invalid"]));
    assert!(result.is_err());
}
