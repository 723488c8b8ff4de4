//! Nearest-centroid classifier over binary symptom vectors.
//!
//! Each class is represented by the mean of its sample vectors. A query is
//! assigned to the class whose centroid has the highest cosine similarity;
//! the confidence is that class's share of the total similarity mass.
//!
//! The model artifact is JSON:
//!
//! ```json
//! {
//!   "feature_names": ["itching", "skin_rash"],
//!   "classes": [
//!     { "label": "Fungal infection", "centroid": [0.9, 0.8] }
//!   ]
//! }
//! ```
//!
//! `feature_names` is optional.

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SymptomError};
use crate::features::FeatureVector;
use crate::ml::classifier::{Classifier, Prediction};

/// One class centroid in a model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPrototype {
    pub label: String,
    pub centroid: Vec<f64>,
}

/// Serialized form of a [`PrototypeClassifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrototypeModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub classes: Vec<ClassPrototype>,
}

/// A feature vector with its known condition.
#[derive(Debug, Clone)]
pub struct LabeledSample {
    pub label: String,
    pub features: FeatureVector,
}

impl LabeledSample {
    pub fn new<S: Into<String>>(label: S, features: FeatureVector) -> Self {
        LabeledSample {
            label: label.into(),
            features,
        }
    }
}

/// Nearest-centroid classifier.
#[derive(Debug, Clone)]
pub struct PrototypeClassifier {
    model: PrototypeModel,
    feature_count: usize,
}

impl PrototypeClassifier {
    /// Validate a model and wrap it.
    pub fn new(model: PrototypeModel) -> Result<Self> {
        let first = model
            .classes
            .first()
            .ok_or_else(|| SymptomError::model("model has no classes"))?;
        let feature_count = first.centroid.len();
        if feature_count == 0 {
            return Err(SymptomError::model("model has zero features"));
        }

        {
            let mut labels: AHashSet<&str> = AHashSet::new();
            for class in &model.classes {
                if class.centroid.len() != feature_count {
                    return Err(SymptomError::model(format!(
                        "class '{}' has {} features, expected {}",
                        class.label,
                        class.centroid.len(),
                        feature_count
                    )));
                }
                if class.centroid.iter().any(|v| !v.is_finite()) {
                    return Err(SymptomError::model(format!(
                        "class '{}' has a non-finite centroid value",
                        class.label
                    )));
                }
                if !labels.insert(class.label.as_str()) {
                    return Err(SymptomError::model(format!(
                        "duplicate class label '{}'",
                        class.label
                    )));
                }
            }
        }

        if let Some(names) = &model.feature_names
            && names.len() != feature_count
        {
            return Err(SymptomError::model(format!(
                "model lists {} feature names but has {} features",
                names.len(),
                feature_count
            )));
        }

        Ok(PrototypeClassifier {
            model,
            feature_count,
        })
    }

    /// Build centroids from labeled samples.
    ///
    /// Classes appear in the order their first sample does.
    pub fn from_samples(
        samples: &[LabeledSample],
        feature_names: Option<Vec<String>>,
    ) -> Result<Self> {
        let first = samples
            .first()
            .ok_or_else(|| SymptomError::model("training samples cannot be empty"))?;
        let width = first.features.len();

        let mut classes: Vec<(ClassPrototype, usize)> = Vec::new();
        for sample in samples {
            if sample.features.len() != width {
                return Err(SymptomError::model(format!(
                    "sample for '{}' has {} features, expected {}",
                    sample.label,
                    sample.features.len(),
                    width
                )));
            }
            let idx = match classes.iter().position(|(c, _)| c.label == sample.label) {
                Some(idx) => idx,
                None => {
                    classes.push((
                        ClassPrototype {
                            label: sample.label.clone(),
                            centroid: vec![0.0; width],
                        },
                        0,
                    ));
                    classes.len() - 1
                }
            };
            let (class, count) = &mut classes[idx];
            for (sum, value) in class.centroid.iter_mut().zip(sample.features.as_slice()) {
                *sum += f64::from(*value);
            }
            *count += 1;
        }

        let classes = classes
            .into_iter()
            .map(|(mut class, count)| {
                for value in &mut class.centroid {
                    *value /= count as f64;
                }
                class
            })
            .collect();

        Self::new(PrototypeModel {
            feature_names,
            classes,
        })
    }

    /// Load a model artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SymptomError::io_at(path, e))?;
        let model: PrototypeModel = serde_json::from_str(&content)?;
        let classifier = Self::new(model)?;
        info!(
            "Loaded prototype model with {} classes and {} features from {}",
            classifier.model.classes.len(),
            classifier.feature_count,
            path.display()
        );
        Ok(classifier)
    }

    /// Write the model artifact as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.model)?;
        fs::write(path, content).map_err(|e| SymptomError::io_at(path, e))?;
        Ok(())
    }

    pub fn model(&self) -> &PrototypeModel {
        &self.model
    }

    /// Calculate cosine similarity between two vectors.
    fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
        let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            0.0
        } else {
            dot_product / (magnitude_a * magnitude_b)
        }
    }
}

impl Classifier for PrototypeClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        if features.len() != self.feature_count {
            return Err(SymptomError::model(format!(
                "feature vector has {} slots, model expects {}",
                features.len(),
                self.feature_count
            )));
        }

        let query = features.to_f64();
        let scores: Vec<f64> = self
            .model
            .classes
            .iter()
            .map(|class| Self::cosine_similarity(&query, &class.centroid).max(0.0))
            .collect();

        // First class wins ties.
        let mut best = 0;
        for (idx, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = idx;
            }
        }

        let total: f64 = scores.iter().sum();
        let confidence = if total > 0.0 {
            scores[best] / total
        } else {
            1.0 / scores.len() as f64
        };

        Ok(Prediction {
            label: self.model.classes[best].label.clone(),
            confidence: Some(confidence),
        })
    }

    fn feature_count(&self) -> usize {
        self.feature_count
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.model.feature_names.as_deref()
    }

    fn labels(&self) -> Vec<&str> {
        self.model
            .classes
            .iter()
            .map(|class| class.label.as_str())
            .collect()
    }

    fn name(&self) -> &str {
        "prototype"
    }
}
