//! Symptom matching and feature-vector construction.
//!
//! The pieces here form the request path of the service:
//!
//! - [`matcher::SymptomMatcher`] finds catalog symptoms in normalized text
//! - [`assembler::FeatureLayout`] turns a match set into a binary vector in
//!   the classifier's feature order
//! - [`builder::SymptomVectorBuilder`] ties normalization, matching and
//!   assembly together
//!
//! Everything is immutable after construction, so one builder can serve any
//! number of concurrent requests without locking.

pub mod assembler;
pub mod builder;
pub mod matcher;

pub use assembler::{FeatureLayout, FeatureVector, assemble};
pub use builder::{BuiltVector, SymptomVectorBuilder};
pub use matcher::{MatchSet, SymptomMatcher, display_form, match_symptoms};
