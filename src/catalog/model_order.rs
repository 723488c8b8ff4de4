use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::catalog::loader::load_names;
use crate::error::{Result, SymptomError};

/// Feature names in the order the classifier expects them.
///
/// Names may differ from the catalog in spacing (`joint pain` vs
/// `joint_pain`) and may reorder, drop, or add features. Names are
/// lowercased and trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFeatureOrder {
    names: Arc<[String]>,
}

impl ModelFeatureOrder {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .collect();
        if names.is_empty() {
            return Err(SymptomError::catalog("model feature order is empty"));
        }
        Ok(ModelFeatureOrder {
            names: names.into(),
        })
    }

    /// Load a model feature order from an artifact file.
    pub fn from_file(path: &Path, label_column: &str) -> Result<Self> {
        let order = Self::new(load_names(path, label_column)?)?;
        info!(
            "Loaded model feature order with {} features from {}",
            order.len(),
            path.display()
        );
        Ok(order)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Catalog keys for each feature, in model order.
    pub fn lookup_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(lookup_key)
    }
}

/// Map a model feature name to its canonical catalog key.
pub fn lookup_key(feature_name: &str) -> String {
    feature_name.replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_order_lowercases() {
        let order = ModelFeatureOrder::new(["Fever", " Cough ", "Joint Pain"]).unwrap();
        assert_eq!(order.names(), &["fever", "cough", "joint pain"]);
        let keys: Vec<String> = order.lookup_keys().collect();
        assert_eq!(keys, vec!["fever", "cough", "joint_pain"]);
    }

    #[test]
    fn test_lookup_key_only_touches_spaces() {
        assert_eq!(lookup_key("spotting_ urination"), "spotting__urination");
        assert_eq!(lookup_key("high_fever"), "high_fever");
    }

    #[test]
    fn test_empty_model_order_is_rejected() {
        assert!(ModelFeatureOrder::new(Vec::<&str>::new()).is_err());
    }
}
