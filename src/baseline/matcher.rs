use std::sync::LazyLock;

use regex::Regex;

use crate::checks::{CheckConfig, RequiredChecks};

static DEFAULT_MATCHER: LazyLock<BaselineMatcher> = LazyLock::new(BaselineMatcher::new);

/// A calling form shown in a baseline, paired with the value set that used it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demonstration<'a> {
    /// Name from the enclosing `file:` marker, if any marker was seen yet.
    pub section: Option<&'a str>,
    pub value_set: &'a str,
    pub calling_form: &'a str,
}

/// Scans baseline text for `calling form:` / `valueSet` declaration pairs.
pub struct BaselineMatcher {
    section_pattern: Regex,
    calling_form_pattern: Regex,
    value_set_pattern: Regex,
}

impl Default for BaselineMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BaselineMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            section_pattern: Regex::new(r"^={3,} file:(.*?)=*\s*$").expect("Invalid regex"),
            calling_form_pattern: Regex::new(r#"calling form:\s*"([^"]*)""#)
                .expect("Invalid regex"),
            value_set_pattern: Regex::new(r#"valueSet\s*"([^"]*)""#).expect("Invalid regex"),
        }
    }

    /// Every `(value set, calling form)` pair the baseline demonstrates.
    ///
    /// A pair is recorded at each `valueSet` line, using the calling form
    /// most recently declared in the same section; a `file:` marker forgets
    /// it. Lines with an unterminated quote contribute nothing.
    #[must_use]
    pub fn demonstrations<'a>(&self, baseline: &'a str) -> Vec<Demonstration<'a>> {
        let mut found = Vec::new();
        let mut section = None;
        let mut calling_form: Option<&str> = None;

        for line in baseline.lines() {
            if let Some(caps) = self.section_pattern.captures(line) {
                section = caps.get(1).map(|m| m.as_str().trim());
                calling_form = None;
                continue;
            }

            if let Some(form) = capture(&self.calling_form_pattern, line) {
                calling_form = Some(form);
            }

            if let Some(value_set) = capture(&self.value_set_pattern, line)
                && let Some(calling_form) = calling_form
            {
                found.push(Demonstration {
                    section,
                    value_set,
                    calling_form,
                });
            }
        }

        found
    }

    /// Remove every check for `lang` that the baseline demonstrates.
    ///
    /// Checks for other languages are never touched. Returns how many checks
    /// this call removed.
    pub fn remove_found_forms(
        &self,
        baseline: &str,
        lang: &str,
        checks: &mut RequiredChecks,
    ) -> usize {
        self.demonstrations(baseline)
            .iter()
            .map(|demo| CheckConfig::new(demo.value_set, lang, demo.calling_form))
            .filter(|check| checks.remove(check))
            .count()
    }
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// [`BaselineMatcher::demonstrations`] with the default patterns.
#[must_use]
pub fn demonstrations(baseline: &str) -> Vec<Demonstration<'_>> {
    DEFAULT_MATCHER.demonstrations(baseline)
}

/// [`BaselineMatcher::remove_found_forms`] with the default patterns.
pub fn remove_found_forms(baseline: &str, lang: &str, checks: &mut RequiredChecks) -> usize {
    DEFAULT_MATCHER.remove_found_forms(baseline, lang, checks)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
