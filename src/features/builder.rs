//! The symptom vector builder.
//!
//! # Examples
//!
//! ```
//! use symptom_vector::catalog::SymptomCatalog;
//! use symptom_vector::features::SymptomVectorBuilder;
//!
//! let catalog = SymptomCatalog::new(["fever", "cough", "fatigue"]).unwrap();
//! let builder = SymptomVectorBuilder::new(catalog, None).unwrap();
//!
//! let built = builder.build("I have a high fever and persistent cough");
//! assert_eq!(built.matches.names(), &["fever", "cough"]);
//! assert_eq!(built.vector.as_slice(), &[1, 1, 0]);
//! ```

use log::debug;
use serde::Serialize;

use crate::analysis::TextNormalizer;
use crate::catalog::{ModelFeatureOrder, SymptomCatalog};
use crate::error::Result;
use crate::features::assembler::{FeatureLayout, FeatureVector};
use crate::features::matcher::{MatchSet, SymptomMatcher};

/// Output of one build: the normalized text, what matched, and the vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltVector {
    pub normalized: String,
    pub matches: MatchSet,
    pub vector: FeatureVector,
}

/// Turns free text into a classifier feature vector.
///
/// All state is fixed at construction and read-only afterwards; the builder
/// is `Send + Sync` and can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SymptomVectorBuilder {
    normalizer: TextNormalizer,
    matcher: SymptomMatcher,
    layout: FeatureLayout,
    model_order: Option<ModelFeatureOrder>,
    max_input_chars: Option<usize>,
}

impl SymptomVectorBuilder {
    /// Create a builder for a catalog and an optional model feature order.
    pub fn new(catalog: SymptomCatalog, model_order: Option<ModelFeatureOrder>) -> Result<Self> {
        let layout = FeatureLayout::new(&catalog, model_order.as_ref())?;
        Ok(SymptomVectorBuilder {
            normalizer: TextNormalizer::standard(),
            matcher: SymptomMatcher::new(catalog),
            layout,
            model_order,
            max_input_chars: None,
        })
    }

    /// Cap the number of input characters scanned per request.
    pub fn with_max_input_chars(mut self, max_input_chars: Option<usize>) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// Replace the standard normalizer.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        self.matcher.catalog()
    }

    pub fn model_order(&self) -> Option<&ModelFeatureOrder> {
        self.model_order.as_ref()
    }

    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }

    /// Length of every vector this builder produces.
    pub fn vector_len(&self) -> usize {
        self.layout.len()
    }

    pub fn normalize(&self, raw_text: &str) -> String {
        self.normalizer.normalize(self.truncate(raw_text))
    }

    pub fn find(&self, normalized_text: &str) -> MatchSet {
        self.matcher.find(normalized_text)
    }

    /// Normalize, match and assemble in one go.
    pub fn build(&self, raw_text: &str) -> BuiltVector {
        let normalized = self.normalize(raw_text);
        let matches = self.matcher.find(&normalized);
        let vector = self.layout.assemble(&matches);
        debug!(
            "Matched {} symptoms, {} of {} features active",
            matches.len(),
            vector.active_count(),
            vector.len()
        );
        BuiltVector {
            normalized,
            matches,
            vector,
        }
    }

    fn truncate<'a>(&self, raw_text: &'a str) -> &'a str {
        match self.max_input_chars {
            Some(max) => match raw_text.char_indices().nth(max) {
                Some((end, _)) => &raw_text[..end],
                None => raw_text,
            },
            None => raw_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> SymptomVectorBuilder {
        let catalog = SymptomCatalog::new(["fever", "cough", "fatigue", "joint_pain"]).unwrap();
        SymptomVectorBuilder::new(catalog, None).unwrap()
    }

    #[test]
    fn test_build_reports_normalized_text() {
        let built = builder().build("  Joint-Pain & FEVER!! ");
        assert_eq!(built.normalized, "joint pain fever");
        assert_eq!(built.matches.names(), &["fever", "joint_pain"]);
        assert_eq!(built.vector.as_slice(), &[1, 0, 0, 1]);
    }

    #[test]
    fn test_blank_input_gives_zero_vector() {
        let builder = builder();
        let built = builder.build(" \n\t ?! ");
        assert!(built.normalized.is_empty());
        assert!(built.matches.is_empty());
        assert_eq!(built.vector, FeatureVector::zeros(builder.vector_len()));
    }

    #[test]
    fn test_max_input_chars_truncates_on_char_boundary() {
        let builder = builder().with_max_input_chars(Some(8));
        assert_eq!(builder.normalize("fièvre fever cough"), "fièvre f");
        let built = builder.build("cough fatigue");
        assert_eq!(built.matches.names(), &["cough"]);
    }

    #[test]
    fn test_model_order_sets_vector_len() {
        let catalog = SymptomCatalog::new(["fever", "cough"]).unwrap();
        let order = ModelFeatureOrder::new(["cough", "fever", "total_weight"]).unwrap();
        let builder = SymptomVectorBuilder::new(catalog, Some(order)).unwrap();
        assert_eq!(builder.vector_len(), 3);
        assert_eq!(builder.build("fever").vector.as_slice(), &[0, 1, 0]);
    }

    #[test]
    fn test_builder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SymptomVectorBuilder>();
    }
}
