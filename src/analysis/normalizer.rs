//! Text normalizer that prepares free text for symptom matching.
//!
//! The normalizer applies its char filters in the order they were added.
//! The standard chain is:
//!
//! 1. [`LowercaseCharFilter`]
//! 2. [`PatternReplaceCharFilter`] replacing every non letter/digit/whitespace
//!    character with one space (underscore included)
//! 3. [`WhitespaceCollapseCharFilter`]
//!
//! Normalization is total and idempotent: any string is accepted, and
//! normalizing an already normalized string returns it unchanged.
//!
//! # Examples
//!
//! ```
//! use symptom_vector::analysis::normalize;
//!
//! assert_eq!(normalize("  High-FEVER,  and joint_pain!! "), "high fever and joint pain");
//! assert_eq!(normalize(""), "");
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::whitespace::WhitespaceCollapseCharFilter;

/// Matches a single character that is not a letter, digit, or whitespace.
pub const NON_ALPHANUMERIC_PATTERN: &str = r"[^\p{L}\p{N}\s]";

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex =
        Regex::new(NON_ALPHANUMERIC_PATTERN).expect("non-alphanumeric pattern is valid");
    static ref STANDARD_NORMALIZER: TextNormalizer = TextNormalizer::standard();
}

/// Normalize raw text with the shared standard normalizer.
pub fn normalize(raw_text: &str) -> String {
    STANDARD_NORMALIZER.normalize(raw_text)
}

/// A chain of char filters applied to raw input text.
#[derive(Clone)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    name: String,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<&str> = self.char_filters.iter().map(|c| c.name()).collect();
        f.debug_struct("TextNormalizer")
            .field("name", &self.name)
            .field("char_filters", &filters)
            .finish()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::standard()
    }
}

impl TextNormalizer {
    /// Create an empty normalizer that returns its input unchanged.
    pub fn empty() -> Self {
        TextNormalizer {
            char_filters: Vec::new(),
            name: "empty".to_string(),
        }
    }

    /// Create the standard lowercase / strip punctuation / collapse chain.
    pub fn standard() -> Self {
        TextNormalizer::empty()
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::from_regex(
                NON_ALPHANUMERIC.clone(),
                " ",
            )))
            .add_char_filter(Arc::new(WhitespaceCollapseCharFilter::new()))
            .with_name("standard")
    }

    /// Add a char filter to the end of the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Set a custom name for this normalizer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the name of this normalizer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the char filters used by this normalizer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Run the text through every char filter in order.
    pub fn normalize(&self, raw_text: &str) -> String {
        let mut text = raw_text.to_string();
        for char_filter in &self.char_filters {
            text = char_filter.filter(&text);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chain_order() {
        let normalizer = TextNormalizer::standard();
        let names: Vec<&str> = normalizer.char_filters().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["lowercase", "pattern_replace", "whitespace_collapse"]);
        assert_eq!(normalizer.name(), "standard");
    }

    #[test]
    fn test_normalize_punctuation_and_case() {
        assert_eq!(
            normalize("I have a HIGH fever, and a persistent cough!"),
            "i have a high fever and a persistent cough"
        );
        assert_eq!(normalize("stomach_pain/vomiting"), "stomach pain vomiting");
        assert_eq!(normalize("temp: 39.5C"), "temp 39 5c");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
        assert_eq!(normalize("?!...;;"), "");
    }

    #[test]
    fn test_normalize_keeps_non_ascii_letters() {
        assert_eq!(normalize("Fièvre ÉLEVÉE"), "fièvre élevée");
        assert_eq!(normalize("発熱と咳"), "発熱と咳");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "  Joint_Pain -- since MONDAY  ",
            "Headache;\tnausea\r\nvomiting",
            "high_fever(39°C)",
            "İstanbul ÇOUGH",
            "emoji 🤒 fever",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_empty_normalizer_is_identity() {
        let normalizer = TextNormalizer::empty();
        assert_eq!(normalizer.normalize("Keep_AS is!"), "Keep_AS is!");
    }
}
