use std::path::{Path, PathBuf};

use crate::baseline::BaselineMatcher;
use crate::checks::RequiredChecks;
use crate::cli::{CheckArgs, Cli};
use crate::error::{CheckError, Result};
use crate::output::formatter_for;
use crate::report::{BaselineOutcome, CheckReport};
use crate::scanner::{
    BaselineSource, DirectoryScanner, FileScanner, GlobFilter, language_from_path,
};
use crate::{EXIT_CHECKS_MISSING, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_filtered_checks, read_baseline, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a full check and returns the process exit code.
///
/// # Errors
/// Returns an error if the check file or a baseline cannot be read, the
/// check file is malformed, or no baseline files are found.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let verbose = if cli.quiet { 0 } else { cli.verbose };

    // 1. Load required checks
    let checks = load_filtered_checks(&args.config, &args.lang)?;
    if verbose >= 1 {
        eprintln!(
            "Loaded {} checks for {} languages from {}",
            checks.len(),
            checks.languages().len(),
            args.config.display()
        );
    }

    // 2. Locate baselines
    let sources = collect_sources(args)?;

    // 3. Match every baseline against the shared set
    let report = match_baselines(checks, &sources, verbose)?;

    // 4. Format and write output
    let formatter = formatter_for(args.format, cli.color.into(), verbose);
    let output = formatter.format(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if report.is_success() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_CHECKS_MISSING)
    }
}

/// Baseline files to match: explicit `--baseline` pairs first, then files
/// discovered under the scan paths, restricted to `--lang` when given.
///
/// # Errors
/// Returns an error for an invalid pattern, an unreadable scan path, or
/// when nothing is found.
pub fn collect_sources(args: &CheckArgs) -> Result<Vec<BaselineSource>> {
    let mut sources = args.baseline.clone();

    let default_paths = [PathBuf::from(".")];
    let paths: &[PathBuf] = if args.paths.is_empty() && args.baseline.is_empty() {
        &default_paths
    } else {
        &args.paths
    };

    let scanner = DirectoryScanner::new(GlobFilter::new(&args.include, &args.exclude)?);
    for root in paths {
        for path in scanner.scan(root)? {
            match language_from_path(&path) {
                Some(lang) => sources.push(BaselineSource::new(lang, path)),
                None => eprintln!("Warning: cannot infer a language for {}", path.display()),
            }
        }
    }

    if !args.lang.is_empty() {
        sources.retain(|s| args.lang.contains(&s.lang));
    }

    if sources.is_empty() {
        return Err(CheckError::NoBaselines(describe_search(paths, &args.include)));
    }
    Ok(sources)
}

fn describe_search(paths: &[PathBuf], include: &[String]) -> String {
    let paths: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    format!("searched {} for {}", paths.join(", "), include.join(", "))
}

/// Read each baseline in turn and strike the checks it demonstrates.
///
/// # Errors
/// Returns an error if a baseline cannot be read.
pub fn match_baselines(
    mut checks: RequiredChecks,
    sources: &[BaselineSource],
    verbose: u8,
) -> Result<CheckReport> {
    let total = checks.len();
    let matcher = BaselineMatcher::new();
    let mut outcomes = Vec::with_capacity(sources.len());

    for source in sources {
        let text = read_baseline(&source.path)?;

        if verbose >= 2 {
            log_demonstrations(&matcher, &text, &source.path);
        }

        let satisfied = matcher.remove_found_forms(&text, &source.lang, &mut checks);
        if verbose >= 1 {
            eprintln!(
                "Scanned {} ({}): {satisfied} checks satisfied, {} left for {}",
                source.path.display(),
                source.lang,
                checks.count_for_lang(&source.lang),
                source.lang
            );
        }
        outcomes.push(BaselineOutcome::new(source, satisfied));
    }

    Ok(CheckReport::new(total, outcomes, checks))
}

fn log_demonstrations(matcher: &BaselineMatcher, text: &str, path: &Path) {
    for demo in matcher.demonstrations(text) {
        eprintln!(
            "  {}[{}]: valueSet \"{}\" calling form \"{}\"",
            path.display(),
            demo.section.unwrap_or("-"),
            demo.value_set,
            demo.calling_form
        );
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
