use std::path::PathBuf;

use crate::checks::{CheckConfig, RequiredChecks};
use crate::scanner::BaselineSource;

/// What one baseline file contributed to the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineOutcome {
    pub path: PathBuf,
    pub lang: String,
    /// Checks this file satisfied that no earlier file had.
    pub satisfied: usize,
}

impl BaselineOutcome {
    #[must_use]
    pub fn new(source: &BaselineSource, satisfied: usize) -> Self {
        Self {
            path: source.path.clone(),
            lang: source.lang.clone(),
            satisfied,
        }
    }
}

/// Result of matching all baselines against the required checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub total_checks: usize,
    pub baselines: Vec<BaselineOutcome>,
    /// Checks no baseline demonstrated, in declaration order.
    pub missing: Vec<CheckConfig>,
}

impl CheckReport {
    #[must_use]
    pub fn new(
        total_checks: usize,
        baselines: Vec<BaselineOutcome>,
        remaining: RequiredChecks,
    ) -> Self {
        Self {
            total_checks,
            baselines,
            missing: remaining.into_vec(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.missing.is_empty()
    }

    #[must_use]
    pub fn satisfied(&self) -> usize {
        self.total_checks - self.missing.len()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
