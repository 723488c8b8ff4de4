//! Text analysis for symptom matching.
//!
//! Raw user text is run through a chain of char filters before any matching
//! happens. The standard chain lowercases, replaces every character that is
//! not a letter, digit, or whitespace with a space, and collapses whitespace.

pub mod char_filter;
pub mod normalizer;

pub use normalizer::{TextNormalizer, normalize};
