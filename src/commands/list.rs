use crate::cli::{Cli, ListArgs};
use crate::error::Result;
use crate::output::formatter_for;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_filtered_checks, write_output};

#[must_use]
pub fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    match run_list_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Prints the parsed check file.
///
/// # Errors
/// Returns an error if the check file cannot be read or is malformed.
pub fn run_list_impl(args: &ListArgs, cli: &Cli) -> Result<()> {
    let checks = load_filtered_checks(&args.config, &args.lang)?;
    let formatter = formatter_for(args.format, cli.color.into(), cli.verbose);
    let output = formatter.format_checks(&checks)?;
    write_output(None, &output, cli.quiet)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
