#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the calling-form-check binary.
#[macro_export]
macro_rules! calling_form_check {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("calling-form-check"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the default check file.
    pub fn create_checks(&self, content: &str) {
        self.create_file("calling-form-checks.txt", content);
    }

    /// Writes a baseline with one section per `(value set, form)` pair.
    pub fn create_baseline(&self, relative_path: &str, pairs: &[(&str, &str)]) {
        self.create_file(relative_path, &baseline_text(pairs));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Baseline text with one `file:` section per `(value set, form)` pair.
pub fn baseline_text(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (value_set, form))| {
            format!(
                "============== file: sample_{i} ==============\n\
                 // calling form: \"{form}\"\n\
                 // valueSet \"{value_set}\"\n"
            )
        })
        .collect()
}

/// Check file covering two languages.
pub const TWO_LANGUAGE_CHECKS: &str = "\
# Calling forms every generator must demonstrate.
callingFormCheck: publish java: flattened request callable
callingFormCheck: publish go: request
";
