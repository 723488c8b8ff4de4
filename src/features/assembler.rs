//! Feature vector assembly.
//!
//! Without a model feature order the vector follows the catalog: slot `i` is
//! 1 when `catalog[i]` matched. With a model feature order, slot `i` is 1
//! when the catalog key derived from `model_order[i]` (spaces replaced by
//! underscores) matched. Model features that do not map to any catalog
//! entry always contribute 0.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::catalog::model_order::lookup_key;
use crate::catalog::{ModelFeatureOrder, SymptomCatalog};
use crate::error::{Result, SymptomError};
use crate::features::matcher::MatchSet;

/// Fixed-length binary vector consumed by the classifier.
///
/// Only constructible from flags, so every slot is 0 or 1. It cannot be
/// deserialized from arbitrary integers:
///
/// ```compile_fail
/// use symptom_vector::features::FeatureVector;
///
/// let vector: FeatureVector = serde_json::from_str("[2, 7]").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: Vec<u8>,
}

impl FeatureVector {
    /// All-zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        FeatureVector {
            values: vec![0; len],
        }
    }

    pub fn from_flags<I: IntoIterator<Item = bool>>(flags: I) -> Self {
        FeatureVector {
            values: flags.into_iter().map(u8::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    pub fn get(&self, slot: usize) -> Option<u8> {
        self.values.get(slot).copied()
    }

    /// Number of slots set to 1.
    pub fn active_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == 1).count()
    }

    pub fn to_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| f64::from(v)).collect()
    }
}

/// Assemble a vector directly from a match set.
///
/// This is the stateless form of [`FeatureLayout::assemble`]; it never
/// fails, unknown model features simply yield 0.
pub fn assemble(
    matches: &MatchSet,
    catalog: &SymptomCatalog,
    model_order: Option<&ModelFeatureOrder>,
) -> FeatureVector {
    match model_order {
        None => FeatureVector::from_flags(catalog.iter().map(|name| matches.contains(name))),
        Some(order) => {
            FeatureVector::from_flags(order.lookup_keys().map(|key| matches.contains(&key)))
        }
    }
}

/// Where the slot order of a layout comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutSource {
    Catalog,
    ModelOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    feature: String,
    key: String,
    mapped: bool,
}

/// Precomputed mapping from vector slots to catalog keys.
///
/// Built once at startup; the vector length it defines never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLayout {
    slots: Vec<Slot>,
    source: LayoutSource,
}

impl FeatureLayout {
    /// Layout following the catalog order.
    pub fn from_catalog(catalog: &SymptomCatalog) -> Self {
        let slots = catalog
            .iter()
            .map(|name| Slot {
                feature: name.to_string(),
                key: name.to_string(),
                mapped: true,
            })
            .collect();
        FeatureLayout {
            slots,
            source: LayoutSource::Catalog,
        }
    }

    /// Layout following the model feature order.
    ///
    /// Fails when no model feature maps to a catalog entry, since such a
    /// model could never see a non-zero input.
    pub fn from_model_order(catalog: &SymptomCatalog, order: &ModelFeatureOrder) -> Result<Self> {
        let slots: Vec<Slot> = order
            .iter()
            .map(|feature| {
                let key = lookup_key(feature);
                let mapped = catalog.contains(&key);
                Slot {
                    feature: feature.to_string(),
                    key,
                    mapped,
                }
            })
            .collect();

        let mapped = slots.iter().filter(|slot| slot.mapped).count();
        if mapped == 0 {
            return Err(SymptomError::catalog(format!(
                "model feature order ({} features) references no symptom catalog entries",
                slots.len()
            )));
        }
        if mapped < slots.len() {
            warn!(
                "{} of {} model features do not map to a catalog entry and will always be 0",
                slots.len() - mapped,
                slots.len()
            );
        }

        Ok(FeatureLayout {
            slots,
            source: LayoutSource::ModelOrder,
        })
    }

    /// Pick the layout for an optional model order.
    pub fn new(catalog: &SymptomCatalog, order: Option<&ModelFeatureOrder>) -> Result<Self> {
        match order {
            Some(order) => Self::from_model_order(catalog, order),
            None => Ok(Self::from_catalog(catalog)),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn source(&self) -> LayoutSource {
        self.source
    }

    /// Feature names in slot order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.feature.as_str())
    }

    /// Model features with no catalog counterpart.
    pub fn unmapped_features(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| !slot.mapped)
            .map(|slot| slot.feature.as_str())
            .collect()
    }

    pub fn assemble(&self, matches: &MatchSet) -> FeatureVector {
        FeatureVector::from_flags(
            self.slots
                .iter()
                .map(|slot| slot.mapped && matches.contains(&slot.key)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SymptomCatalog {
        SymptomCatalog::new(["fever", "cough", "fatigue"]).unwrap()
    }

    fn matches(names: &[&str]) -> MatchSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_assemble_catalog_order() {
        let vector = assemble(&matches(&["fever", "cough"]), &catalog(), None);
        assert_eq!(vector.as_slice(), &[1, 1, 0]);
        assert_eq!(vector.active_count(), 2);
    }

    #[test]
    fn test_assemble_model_order() {
        let order = ModelFeatureOrder::new(["Fever", "Cough", "Fatigue"]).unwrap();
        let vector = assemble(&matches(&["fever"]), &catalog(), Some(&order));
        assert_eq!(vector.as_slice(), &[1, 0, 0]);
    }

    #[test]
    fn test_model_order_reorders_and_pads() {
        let order = ModelFeatureOrder::new(["fatigue", "total_weight", "fever"]).unwrap();
        let layout = FeatureLayout::from_model_order(&catalog(), &order).unwrap();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.source(), LayoutSource::ModelOrder);
        assert_eq!(layout.unmapped_features(), vec!["total_weight"]);

        let vector = layout.assemble(&matches(&["fever", "fatigue"]));
        assert_eq!(vector.as_slice(), &[1, 0, 1]);
    }

    #[test]
    fn test_model_order_with_spaces() {
        let catalog = SymptomCatalog::new(["joint_pain", "high_fever"]).unwrap();
        let order = ModelFeatureOrder::new(["High Fever", "Joint Pain"]).unwrap();
        let layout = FeatureLayout::from_model_order(&catalog, &order).unwrap();
        assert!(layout.unmapped_features().is_empty());
        assert_eq!(layout.assemble(&matches(&["joint_pain"])).as_slice(), &[0, 1]);
    }

    #[test]
    fn test_model_order_without_catalog_overlap_is_rejected() {
        let order = ModelFeatureOrder::new(["rash", "sneezing"]).unwrap();
        let err = FeatureLayout::from_model_order(&catalog(), &order).unwrap_err();
        assert!(err.is_fatal_config());
    }

    #[test]
    fn test_layout_agrees_with_stateless_assemble() {
        let order = ModelFeatureOrder::new(["cough", "unknown", "fever"]).unwrap();
        let layout = FeatureLayout::new(&catalog(), Some(&order)).unwrap();
        let m = matches(&["cough", "fever"]);
        assert_eq!(layout.assemble(&m), assemble(&m, &catalog(), Some(&order)));

        let layout = FeatureLayout::new(&catalog(), None).unwrap();
        assert_eq!(layout.assemble(&m), assemble(&m, &catalog(), None));
    }

    #[test]
    fn test_vector_serializes_as_plain_bits() {
        let vector = FeatureVector::from_flags([true, false, true]);
        assert_eq!(serde_json::to_string(&vector).unwrap(), "[1,0,1]");
        assert!(vector.as_slice().iter().all(|&v| v <= 1));
    }

    #[test]
    fn test_empty_matches_give_zero_vector() {
        let layout = FeatureLayout::from_catalog(&catalog());
        assert_eq!(layout.assemble(&MatchSet::new()), FeatureVector::zeros(3));
    }
}
