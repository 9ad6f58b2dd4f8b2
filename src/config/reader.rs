use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::checks::{CheckConfig, RequiredChecks};
use crate::error::{CheckError, Result};

/// Check file looked up when no `--config` is given.
pub const DEFAULT_CHECK_FILE: &str = "calling-form-checks.txt";

/// Keyword that opens a declaration line.
pub const DECLARATION_KEYWORD: &str = "callingFormCheck:";

/// A single `callingFormCheck: <id> <lang>: <forms...>` line.
#[derive(Debug, PartialEq, Eq)]
struct Declaration<'a> {
    id: &'a str,
    lang: &'a str,
    forms: Vec<&'a str>,
}

impl Declaration<'_> {
    fn into_checks(self) -> impl Iterator<Item = CheckConfig> {
        let Self { id, lang, forms } = self;
        forms
            .into_iter()
            .map(move |form| CheckConfig::new(id, lang, form))
    }
}

/// Read required checks from a check file.
///
/// # Errors
/// Returns `FileRead` if the file cannot be opened, `Read` if reading fails
/// midway, and `Parse` for a malformed declaration.
pub fn load_checks(path: &Path) -> Result<RequiredChecks> {
    let file = File::open(path).map_err(|source| CheckError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_checks(BufReader::new(file))
}

/// Parse required checks from in-memory text.
///
/// # Errors
/// Returns `Parse` for a malformed declaration.
pub fn parse_checks(text: &str) -> Result<RequiredChecks> {
    read_checks(text.as_bytes())
}

/// Parse required checks line by line.
///
/// Only lines opening with [`DECLARATION_KEYWORD`] (indentation allowed)
/// are declarations; everything else, `#` comments included, is skipped.
/// Each form on a declaration line becomes its own [`CheckConfig`].
///
/// # Errors
/// Returns `Read` if the reader fails and `Parse` for the first malformed
/// declaration. No partial set is returned in either case.
pub fn read_checks<R: BufRead>(reader: R) -> Result<RequiredChecks> {
    let mut checks = RequiredChecks::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(declaration) = parse_line(idx + 1, &line)? {
            checks.extend(declaration.into_checks());
        }
    }

    Ok(checks)
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<Declaration<'_>>> {
    let Some(rest) = line.trim_start().strip_prefix(DECLARATION_KEYWORD) else {
        return Ok(None);
    };

    let Some((head, forms)) = rest.split_once(':') else {
        return Err(CheckError::parse(
            line_no,
            line,
            "missing `<lang>:` separator",
        ));
    };

    let head: Vec<&str> = head.split_whitespace().collect();
    let [id, lang] = head[..] else {
        return Err(CheckError::parse(
            line_no,
            line,
            format!(
                "expected `<id> <lang>:` before the separator, found {} token(s)",
                head.len()
            ),
        ));
    };

    let forms: Vec<&str> = forms.split_whitespace().collect();
    if forms.is_empty() {
        return Err(CheckError::parse(line_no, line, "no calling forms listed"));
    }

    Ok(Some(Declaration { id, lang, forms }))
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
