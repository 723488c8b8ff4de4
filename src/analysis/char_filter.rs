//! Char filter implementations for text normalization.
//!
//! Char filters transform the whole input string before matching. They are
//! pure and stateless, so a single instance can be shared across threads.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`whitespace::WhitespaceCollapseCharFilter`] - Whitespace run collapsing and trimming
//!
//! # Examples
//!
//! ```
//! use symptom_vector::analysis::char_filter::CharFilter;
//! use symptom_vector::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("High FEVER"), "high fever");
//! ```

/// Trait for character filters that transform text before matching.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod whitespace;
