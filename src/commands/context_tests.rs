use tempfile::TempDir;

use super::*;

#[test]
fn load_filtered_checks_without_filter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checks.txt");
    fs::write(&path, "callingFormCheck: s java: a\ncallingFormCheck: s go: b\n").unwrap();

    let checks = load_filtered_checks(&path, &[]).unwrap();

    assert_eq!(checks.len(), 2);
}

#[test]
fn load_filtered_checks_with_filter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checks.txt");
    fs::write(&path, "callingFormCheck: s java: a\ncallingFormCheck: s go: b\n").unwrap();

    let checks = load_filtered_checks(&path, &["go".to_string()]).unwrap();

    assert_eq!(checks.languages(), vec!["go"]);
}

#[test]
fn read_baseline_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_baseline(&dir.path().join("missing.baseline")).unwrap_err();
    assert!(matches!(err, CheckError::FileRead { .. }));
}

#[test]
fn write_output_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/out/report.txt");

    write_output(Some(&path), "content", false).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "content");
}

#[test]
fn write_output_to_directory_fails() {
    let dir = TempDir::new().unwrap();

    let err = write_output(Some(dir.path()), "content", false).unwrap_err();

    assert!(matches!(err, CheckError::FileWrite { .. }));
}
