//! Symptom catalog and model feature order.
//!
//! Both artifacts are loaded once at startup and never mutated afterwards.
//! The catalog defines the universe of recognized symptoms; the optional
//! model feature order, when present, is authoritative for the layout of the
//! feature vector handed to the classifier.

pub mod loader;
pub mod model_order;
pub mod symptoms;

pub use loader::{ArtifactFormat, DEFAULT_LABEL_COLUMN, load_names};
pub use model_order::ModelFeatureOrder;
pub use symptoms::SymptomCatalog;
