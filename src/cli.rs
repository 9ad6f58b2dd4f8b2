use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CHECK_FILE;
use crate::output::{ColorMode, OutputFormat};
use crate::scanner::{BaselineSource, DEFAULT_INCLUDE_PATTERN};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "calling-form-check")]
#[command(
    author,
    version,
    about = "Verify that every configured calling form is demonstrated in sample baselines"
)]
#[command(long_about = "Reads `callingFormCheck:` declarations and scans generated \
    sample baselines for `calling form:` / `valueSet` pairs.\n\n\
    Exit codes:\n  \
    0 - Every calling form is demonstrated\n  \
    1 - Some calling forms are missing from the baselines\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match baselines against the required calling forms
    Check(CheckArgs),

    /// Print the calling forms a check file requires
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Baseline files or directories to scan (defaults to `.` unless --baseline is given)
    pub paths: Vec<PathBuf>,

    /// Path to the check file
    #[arg(short, long, default_value = DEFAULT_CHECK_FILE)]
    pub config: PathBuf,

    /// Baseline for a language, as <LANG>=<FILE> (can be specified multiple times)
    #[arg(long, value_name = "LANG=FILE")]
    pub baseline: Vec<BaselineSource>,

    /// Only check these languages (comma-separated, e.g., java,go)
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Baseline file patterns to pick up from directories
    #[arg(long, default_value = DEFAULT_INCLUDE_PATTERN)]
    pub include: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to the check file
    #[arg(short, long, default_value = DEFAULT_CHECK_FILE)]
    pub config: PathBuf,

    /// Only list these languages (comma-separated, e.g., java,go)
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
