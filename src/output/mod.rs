mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checks::RequiredChecks;
use crate::error::Result;
use crate::report::CheckReport;

/// Trait for rendering run results into various output formats.
pub trait OutputFormatter {
    /// Format a finished check run.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &CheckReport) -> Result<String>;

    /// Format the parsed set of required checks.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_checks(&self, checks: &RequiredChecks) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Build the formatter for `format`.
#[must_use]
pub fn formatter_for(
    format: OutputFormat,
    color: ColorMode,
    verbose: u8,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(color, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
