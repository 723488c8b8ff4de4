//! # symptom-vector
//!
//! Maps free-text symptom descriptions to the binary feature vector a
//! disease classifier expects.
//!
//! ## Features
//!
//! - Total, idempotent text normalization
//! - Substring matching against an ordered symptom catalog
//! - Vector layout in catalog order or in the model's own feature order
//! - Fail-fast validation of catalog, feature order and classifier width
//! - Lock-free, shareable builder and prediction pipeline
//!
//! ## Example
//!
//! ```
//! use symptom_vector::catalog::{ModelFeatureOrder, SymptomCatalog};
//! use symptom_vector::features::SymptomVectorBuilder;
//!
//! let catalog = SymptomCatalog::new(["fever", "cough", "fatigue"]).unwrap();
//! let order = ModelFeatureOrder::new(["Fatigue", "Fever", "Cough"]).unwrap();
//! let builder = SymptomVectorBuilder::new(catalog, Some(order)).unwrap();
//!
//! let built = builder.build("Fever since Monday, no cough.");
//! assert_eq!(built.vector.as_slice(), &[0, 1, 1]);
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod ml;
pub mod pipeline;

pub mod prelude {
    pub use crate::analysis::{TextNormalizer, normalize};
    pub use crate::catalog::{ModelFeatureOrder, SymptomCatalog};
    pub use crate::config::ServiceConfig;
    pub use crate::error::{Result, SymptomError};
    pub use crate::features::{BuiltVector, FeatureVector, MatchSet, SymptomVectorBuilder};
    pub use crate::ml::{Classifier, Prediction, PrototypeClassifier};
    pub use crate::pipeline::{PredictionOutcome, Predictor};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
