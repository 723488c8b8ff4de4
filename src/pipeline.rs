//! Prediction pipeline: free text in, predicted condition out.
//!
//! A [`Predictor`] pairs one [`SymptomVectorBuilder`] with one
//! [`Classifier`]. Both are immutable and shared through `Arc`, so
//! `predict_text` can be called from any number of threads and
//! `predict_batch` fans requests out over rayon without locking.

use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{ModelFeatureOrder, SymptomCatalog};
use crate::config::{DEFAULT_MAX_REQUEST_CHARS, ServiceConfig};
use crate::error::{Result, SymptomError};
use crate::features::SymptomVectorBuilder;
use crate::ml::{Classifier, PrototypeClassifier};

/// Result of one prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub user_input: String,
    pub predicted_label: String,
    pub confidence: Option<f64>,
    pub matched_symptoms: Vec<String>,
}

/// Builder plus classifier, checked for compatibility at construction.
#[derive(Clone)]
pub struct Predictor {
    builder: Arc<SymptomVectorBuilder>,
    classifier: Arc<dyn Classifier>,
    max_request_chars: usize,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("builder", &self.builder)
            .field("classifier", &self.classifier.name())
            .field("max_request_chars", &self.max_request_chars)
            .finish()
    }
}

impl Predictor {
    /// Pair a builder with a classifier.
    ///
    /// Fails with a configuration error when the classifier was built for a
    /// different number of features than the builder produces.
    pub fn new(builder: Arc<SymptomVectorBuilder>, classifier: Arc<dyn Classifier>) -> Result<Self> {
        if classifier.feature_count() != builder.vector_len() {
            return Err(SymptomError::config(format!(
                "classifier '{}' expects {} features but the symptom vector has {}",
                classifier.name(),
                classifier.feature_count(),
                builder.vector_len()
            )));
        }
        Ok(Predictor {
            builder,
            classifier,
            max_request_chars: DEFAULT_MAX_REQUEST_CHARS,
        })
    }

    /// Load every artifact named by `config` and build a predictor.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;

        let catalog = SymptomCatalog::from_file(&config.catalog_path, &config.label_column)?;
        let classifier = PrototypeClassifier::load(&config.model_path)?;

        let model_order = match (&config.model_order_path, classifier.feature_names()) {
            (Some(path), _) => Some(ModelFeatureOrder::from_file(path, &config.label_column)?),
            (None, Some(names)) if config.use_model_feature_names => {
                info!("Using the model's {} feature names as feature order", names.len());
                Some(ModelFeatureOrder::new(names)?)
            }
            _ => None,
        };

        let builder = SymptomVectorBuilder::new(catalog, model_order)?
            .with_max_input_chars(config.max_input_chars);

        Ok(Self::new(Arc::new(builder), Arc::new(classifier))?
            .with_max_request_chars(config.max_request_chars))
    }

    pub fn with_max_request_chars(mut self, max_request_chars: usize) -> Self {
        self.max_request_chars = max_request_chars;
        self
    }

    pub fn builder(&self) -> &SymptomVectorBuilder {
        &self.builder
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Reject blank or oversized requests.
    pub fn validate_input(&self, user_input: &str) -> Result<()> {
        if user_input.trim().is_empty() {
            return Err(SymptomError::invalid_input("user input cannot be empty"));
        }
        if user_input.chars().count() > self.max_request_chars {
            return Err(SymptomError::invalid_input(format!(
                "input too long (max {} characters)",
                self.max_request_chars
            )));
        }
        Ok(())
    }

    pub fn predict_text(&self, user_input: &str) -> Result<PredictionOutcome> {
        self.validate_input(user_input)?;

        let built = self.builder.build(user_input);
        let prediction = self.classifier.predict(&built.vector)?;
        debug!(
            "Predicted '{}' from {} matched symptoms",
            prediction.label,
            built.matches.len()
        );

        Ok(PredictionOutcome {
            user_input: user_input.to_string(),
            predicted_label: prediction.label,
            confidence: prediction.confidence,
            matched_symptoms: built.matches.into_names(),
        })
    }

    /// Predict many inputs in parallel; results keep the input order.
    pub fn predict_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Result<PredictionOutcome>> {
        inputs
            .par_iter()
            .map(|input| self.predict_text(input.as_ref()))
            .collect()
    }
}
