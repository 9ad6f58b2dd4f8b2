use std::io::Write;

use crate::checks::{CheckConfig, RequiredChecks};
use crate::error::Result;
use crate::report::{BaselineOutcome, CheckReport};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_missing(&self, check: &CheckConfig, output: &mut Vec<u8>) {
        let status = self.colorize("MISSING", ansi::RED);
        writeln!(output, "✗ {status}: {check}").ok();
    }

    fn format_baseline(&self, outcome: &BaselineOutcome, output: &mut Vec<u8>) {
        let lang = self.colorize(&outcome.lang, ansi::CYAN);
        writeln!(
            output,
            "◉ {lang}: {} ({} satisfied)",
            outcome.path.display(),
            outcome.satisfied
        )
        .ok();
    }

    fn format_summary(&self, report: &CheckReport) -> String {
        let satisfied = self.colorize(&report.satisfied().to_string(), ansi::GREEN);
        let missing = self.colorize(&report.missing.len().to_string(), ansi::RED);
        format!(
            "Summary: {} checks, {satisfied} satisfied, {missing} missing ({} baselines scanned)",
            report.total_checks,
            report.baselines.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = Vec::new();

        if self.verbose >= 1 {
            for outcome in &report.baselines {
                self.format_baseline(outcome, &mut output);
            }
            if !report.baselines.is_empty() {
                writeln!(output).ok();
            }
        }

        for check in &report.missing {
            self.format_missing(check, &mut output);
        }

        if report.is_success() {
            let ok = self.colorize("✓", ansi::GREEN);
            writeln!(output, "{ok} Every calling form is demonstrated").ok();
        } else {
            writeln!(output).ok();
        }

        writeln!(output, "{}", self.format_summary(report)).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }

    fn format_checks(&self, checks: &RequiredChecks) -> Result<String> {
        let mut output = Vec::new();

        for check in checks {
            writeln!(output, "{check}").ok();
        }

        writeln!(
            output,
            "{} checks across {} languages",
            checks.len(),
            checks.languages().len()
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
