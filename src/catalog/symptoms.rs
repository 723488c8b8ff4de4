use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use log::{info, warn};

use crate::catalog::loader::load_names;
use crate::error::{Result, SymptomError};

/// Ordered, immutable list of canonical symptom names.
///
/// Canonical names are lowercase and underscore-joined, e.g. `high_fever`.
/// Entries are lowercased and trimmed on construction. Cloning is cheap; the
/// names are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomCatalog {
    names: Arc<[String]>,
}

impl SymptomCatalog {
    /// Build a catalog from names in their authoritative order.
    ///
    /// Fails if there are no names or any name is blank. Duplicates are kept
    /// at each of their positions.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical = Vec::new();
        let mut seen = AHashSet::new();
        for (position, name) in names.into_iter().enumerate() {
            let name = name.as_ref().trim().to_lowercase();
            if name.is_empty() {
                return Err(SymptomError::catalog(format!(
                    "symptom catalog entry at position {position} is blank"
                )));
            }
            if !seen.insert(name.clone()) {
                warn!("Duplicate symptom catalog entry '{name}' at position {position}");
            }
            canonical.push(name);
        }

        if canonical.is_empty() {
            return Err(SymptomError::catalog("symptom catalog is empty"));
        }

        Ok(SymptomCatalog {
            names: canonical.into(),
        })
    }

    /// Load a catalog from an artifact file.
    pub fn from_file(path: &Path, label_column: &str) -> Result<Self> {
        let catalog = Self::new(load_names(path, label_column)?)?;
        info!(
            "Loaded symptom catalog with {} entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// First position of `name`, if it is a catalog entry.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_canonicalizes_entries() {
        let catalog = SymptomCatalog::new([" High_Fever ", "cough", "JOINT_PAIN"]).unwrap();
        assert_eq!(catalog.names(), &["high_fever", "cough", "joint_pain"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(2), Some("joint_pain"));
        assert_eq!(catalog.position("cough"), Some(1));
        assert!(!catalog.contains("fatigue"));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let err = SymptomCatalog::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, SymptomError::Catalog(_)));
        assert!(err.is_fatal_config());
    }

    #[test]
    fn test_blank_entry_is_rejected() {
        let err = SymptomCatalog::new(["fever", "  "]).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_duplicates_keep_their_positions() {
        let catalog = SymptomCatalog::new(["fever", "cough", "fever"]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position("fever"), Some(0));
    }
}
