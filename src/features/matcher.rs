//! Substring matcher for catalog symptoms.
//!
//! A symptom is found when its display form (the canonical name with
//! underscores replaced by spaces) occurs anywhere in the normalized text.
//! There is no tokenization, stemming, or word-boundary check: `pain` is
//! found in `painting`, and `joint pain` is only found when both words are
//! adjacent and in that order.
//!
//! # Examples
//!
//! ```
//! use symptom_vector::catalog::SymptomCatalog;
//! use symptom_vector::features::SymptomMatcher;
//!
//! let catalog = SymptomCatalog::new(["fever", "cough", "joint_pain"]).unwrap();
//! let matcher = SymptomMatcher::new(catalog);
//!
//! let matches = matcher.find("my joint pain and fever are severe");
//! assert_eq!(matches.names(), &["fever", "joint_pain"]);
//! ```

use ahash::AHashSet;
use serde::Serialize;

use crate::catalog::SymptomCatalog;

/// Display form of a canonical symptom name.
pub fn display_form(canonical_name: &str) -> String {
    canonical_name.replace('_', " ")
}

/// Find catalog symptoms in already normalized text.
pub fn match_symptoms(normalized_text: &str, catalog: &SymptomCatalog) -> MatchSet {
    SymptomMatcher::new(catalog.clone()).find(normalized_text)
}

/// Canonical names found in one input, kept in catalog order.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MatchSet {
    names: Vec<String>,
    #[serde(skip)]
    index: AHashSet<String>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name; returns false if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if !self.index.insert(name.to_string()) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Matched names in the order they were found.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl PartialEq for MatchSet {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for MatchSet {}

impl<S: AsRef<str>> FromIterator<S> for MatchSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = MatchSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

/// Matcher with display forms precomputed for one catalog.
#[derive(Debug, Clone)]
pub struct SymptomMatcher {
    catalog: SymptomCatalog,
    display_forms: Vec<String>,
}

impl SymptomMatcher {
    pub fn new(catalog: SymptomCatalog) -> Self {
        let display_forms = catalog.iter().map(display_form).collect();
        SymptomMatcher {
            catalog,
            display_forms,
        }
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn display_forms(&self) -> &[String] {
        &self.display_forms
    }

    /// Scan the catalog in order and collect every symptom whose display
    /// form occurs in `normalized_text`.
    pub fn find(&self, normalized_text: &str) -> MatchSet {
        let mut matches = MatchSet::new();
        if normalized_text.is_empty() {
            return matches;
        }
        for (name, display) in self.catalog.iter().zip(&self.display_forms) {
            if normalized_text.contains(display.as_str()) {
                matches.insert(name);
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> SymptomCatalog {
        SymptomCatalog::new(names.iter().copied()).unwrap()
    }

    #[test]
    fn test_find_in_catalog_order() {
        let matcher = SymptomMatcher::new(catalog(&["fever", "cough", "fatigue"]));
        let matches = matcher.find("i have a high fever and persistent cough");
        assert_eq!(matches.names(), &["fever", "cough"]);
        assert!(matches.contains("fever"));
        assert!(!matches.contains("fatigue"));

        let matches = matcher.find("cough first then fever");
        assert_eq!(matches.names(), &["fever", "cough"]);
    }

    #[test]
    fn test_underscore_display_form() {
        let matcher = SymptomMatcher::new(catalog(&["joint_pain"]));
        assert_eq!(matcher.display_forms(), &["joint pain"]);
        assert_eq!(matcher.find("my joint pain is severe").names(), &["joint_pain"]);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        let matcher = SymptomMatcher::new(catalog(&["pain", "cough"]));
        assert_eq!(matcher.find("painting the wall").names(), &["pain"]);
        assert_eq!(matcher.find("coughing all night").names(), &["cough"]);
    }

    #[test]
    fn test_multi_word_needs_adjacent_words_in_order() {
        let matcher = SymptomMatcher::new(catalog(&["joint_pain"]));
        assert!(matcher.find("pain in my joint").is_empty());
        assert!(matcher.find("joint and pain").is_empty());
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let matcher = SymptomMatcher::new(catalog(&["fever"]));
        assert!(matcher.find("").is_empty());
    }

    #[test]
    fn test_duplicate_catalog_entries_match_once() {
        let matcher = SymptomMatcher::new(catalog(&["fever", "fever"]));
        assert_eq!(matcher.find("fever").len(), 1);
    }

    #[test]
    fn test_match_set_from_iter_dedupes() {
        let set: MatchSet = ["fever", "cough", "fever"].into_iter().collect();
        assert_eq!(set.names(), &["fever", "cough"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["fever","cough"]"#);
    }

    #[test]
    fn test_match_set_equality_ignores_order() {
        let a: MatchSet = ["fever", "cough"].into_iter().collect();
        let b: MatchSet = ["cough", "fever"].into_iter().collect();
        assert_eq!(a, b);
    }
}
