use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CheckError, Result};

/// Files picked up from baseline directories when no `--include` is given.
pub const DEFAULT_INCLUDE_PATTERN: &str = "*.baseline";

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

pub struct GlobFilter {
    include_patterns: GlobSet,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given include and exclude patterns.
    ///
    /// An empty include list accepts every file not excluded.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            include_patterns: build_glob_set(include_patterns)?,
            exclude_patterns: build_glob_set(exclude_patterns)?,
        })
    }

    fn is_included(&self, path: &Path) -> bool {
        self.include_patterns.is_empty()
            || self.include_patterns.is_match(path)
            || path
                .file_name()
                .is_some_and(|name| self.include_patterns.is_match(name))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.is_included(path) && !self.is_excluded(path)
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| CheckError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| CheckError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
