use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A baseline file and the language its samples are written in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BaselineSource {
    pub lang: String,
    pub path: PathBuf,
}

impl BaselineSource {
    #[must_use]
    pub fn new(lang: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            lang: lang.into(),
            path: path.into(),
        }
    }
}

/// Parses `<lang>=<path>`, the form accepted by `--baseline`.
impl FromStr for BaselineSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (lang, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected <LANG>=<FILE>, got `{s}`"))?;
        let lang = lang.trim();
        if lang.is_empty() || path.is_empty() {
            return Err(format!("expected <LANG>=<FILE>, got `{s}`"));
        }
        Ok(Self::new(lang, path))
    }
}

/// Language of a baseline file: the file stem up to its first `_`.
///
/// `java_library.baseline` is `java`, `go.baseline` is `go`.
#[must_use]
pub fn language_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let lang = stem.split('_').next().unwrap_or(stem);
    if lang.is_empty() {
        return None;
    }
    Some(lang.to_string())
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
