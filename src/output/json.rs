use serde::Serialize;

use crate::checks::{CheckConfig, RequiredChecks};
use crate::error::Result;
use crate::report::CheckReport;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    baselines: Vec<BaselineResult>,
    missing: &'a [CheckConfig],
}

#[derive(Serialize)]
struct Summary {
    total_checks: usize,
    satisfied: usize,
    missing: usize,
    passed: bool,
}

#[derive(Serialize)]
struct BaselineResult {
    path: String,
    lang: String,
    satisfied: usize,
}

#[derive(Serialize)]
struct ChecksOutput<'a> {
    total_checks: usize,
    languages: Vec<&'a str>,
    checks: Vec<&'a CheckConfig>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_checks: report.total_checks,
                satisfied: report.satisfied(),
                missing: report.missing.len(),
                passed: report.is_success(),
            },
            baselines: report
                .baselines
                .iter()
                .map(|b| BaselineResult {
                    path: b.path.display().to_string(),
                    lang: b.lang.clone(),
                    satisfied: b.satisfied,
                })
                .collect(),
            missing: &report.missing,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_checks(&self, checks: &RequiredChecks) -> Result<String> {
        let output = ChecksOutput {
            total_checks: checks.len(),
            languages: checks.languages(),
            checks: checks.iter().collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
