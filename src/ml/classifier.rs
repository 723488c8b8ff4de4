//! Classifier trait definition.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::FeatureVector;

/// A predicted condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    /// Probability-like score in `[0, 1]`, if the model provides one.
    pub confidence: Option<f64>,
}

/// Classifier trait.
///
/// Implementations must be safe to call from many threads at once; the
/// prediction pipeline shares one instance across all requests.
pub trait Classifier: Send + Sync {
    /// Predict the condition for a feature vector.
    ///
    /// # Arguments
    /// * `features` - Binary vector of exactly [`Classifier::feature_count`] slots
    fn predict(&self, features: &FeatureVector) -> Result<Prediction>;

    /// Input width the model was built for.
    fn feature_count(&self) -> usize;

    /// Feature names in model order, if the model carries them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Labels this classifier can return.
    fn labels(&self) -> Vec<&str>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
