use regex::{NoExpand, Regex};

use super::CharFilter;
use crate::error::{Result, SymptomError};

/// A char filter that replaces every match of a regex pattern.
///
/// The replacement is inserted literally; `$` has no special meaning.
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| SymptomError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter from an already compiled regex.
    pub fn from_regex(pattern: Regex, replacement: &str) -> Self {
        Self {
            pattern,
            replacement: replacement.to_string(),
        }
    }

    /// The pattern this filter replaces.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
