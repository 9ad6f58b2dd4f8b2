use std::fs;
use std::path::Path;

use crate::checks::RequiredChecks;
use crate::config::load_checks;
use crate::error::{CheckError, Result};

/// Load the check file, keeping only `langs` when any are given.
pub(crate) fn load_filtered_checks(path: &Path, langs: &[String]) -> Result<RequiredChecks> {
    let mut checks = load_checks(path)?;
    if !langs.is_empty() {
        checks.retain_langs(|lang| langs.iter().any(|l| l == lang));
    }
    Ok(checks)
}

pub(crate) fn read_baseline(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CheckError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        let to_write_error = |source: std::io::Error| CheckError::FileWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }
        fs::write(path, content).map_err(to_write_error)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
