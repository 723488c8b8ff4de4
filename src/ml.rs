//! Classifiers consuming symptom feature vectors.
//!
//! The service only needs the [`Classifier`] capability: a fixed input
//! width and `predict(vector) -> label, confidence`. [`PrototypeClassifier`]
//! is the bundled implementation, a nearest-centroid model stored as JSON.

pub mod classifier;
pub mod prototype;

pub use classifier::{Classifier, Prediction};
pub use prototype::{ClassPrototype, LabeledSample, PrototypeClassifier, PrototypeModel};
