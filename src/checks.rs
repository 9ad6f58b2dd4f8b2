use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

/// One required `(id, lang, form)` triple.
///
/// `id` names the value set the calling form belongs to, `lang` the target
/// language, and `form` the literal calling-form token expected in a baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CheckConfig {
    pub id: String,
    pub lang: String,
    pub form: String,
}

impl CheckConfig {
    #[must_use]
    pub fn new(id: impl Into<String>, lang: impl Into<String>, form: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lang: lang.into(),
            form: form.into(),
        }
    }
}

impl fmt::Display for CheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.id, self.lang, self.form)
    }
}

/// Set of checks that still have to be demonstrated by some baseline.
///
/// Built once from the check file and shrunk as baselines are matched.
/// Iteration follows declaration order; nothing depends on it beyond
/// stable reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredChecks {
    checks: IndexSet<CheckConfig>,
}

impl RequiredChecks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a check. Returns `false` if it was already present.
    pub fn insert(&mut self, check: CheckConfig) -> bool {
        self.checks.insert(check)
    }

    /// Marks a check as found. Returns `false` if it was not present.
    pub fn remove(&mut self, check: &CheckConfig) -> bool {
        self.checks.shift_remove(check)
    }

    #[must_use]
    pub fn contains(&self, check: &CheckConfig) -> bool {
        self.checks.contains(check)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckConfig> {
        self.checks.iter()
    }

    /// Distinct languages in the order they were first declared.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let langs: IndexSet<&str> = self.checks.iter().map(|c| c.lang.as_str()).collect();
        langs.into_iter().collect()
    }

    #[must_use]
    pub fn count_for_lang(&self, lang: &str) -> usize {
        self.checks.iter().filter(|c| c.lang == lang).count()
    }

    /// Keeps only the checks whose language satisfies `keep`.
    pub fn retain_langs(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.checks.retain(|c| keep(&c.lang));
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<CheckConfig> {
        self.checks.into_iter().collect()
    }
}

impl FromIterator<CheckConfig> for RequiredChecks {
    fn from_iter<I: IntoIterator<Item = CheckConfig>>(iter: I) -> Self {
        Self {
            checks: iter.into_iter().collect(),
        }
    }
}

impl Extend<CheckConfig> for RequiredChecks {
    fn extend<I: IntoIterator<Item = CheckConfig>>(&mut self, iter: I) {
        self.checks.extend(iter);
    }
}

impl IntoIterator for RequiredChecks {
    type Item = CheckConfig;
    type IntoIter = indexmap::set::IntoIter<CheckConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.into_iter()
    }
}

impl<'a> IntoIterator for &'a RequiredChecks {
    type Item = &'a CheckConfig;
    type IntoIter = indexmap::set::Iter<'a, CheckConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.iter()
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
