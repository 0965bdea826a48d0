//! Char filter implementations for Arabic text normalization.
//!
//! Each filter performs one rewrite of the raw text. The [`Normalizer`]
//! chains them in a fixed order to produce the canonical form that the
//! reference tables are keyed on.
//!
//! # Available Filters
//!
//! - [`trim::TrimCharFilter`] - Leading/trailing whitespace removal
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`mapping::MappingCharFilter`] - Per-character mapping and deletion
//!
//! # Examples
//!
//! ```
//! use abjad::analysis::char_filter::CharFilter;
//! use abjad::analysis::char_filter::trim::TrimCharFilter;
//!
//! let filter = TrimCharFilter::new();
//! assert_eq!(filter.filter("  سلام "), "سلام");
//! ```
//!
//! [`Normalizer`]: crate::analysis::normalizer::Normalizer

/// Trait for character filters that rewrite text before lookup.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod mapping;
pub mod pattern_replace;
pub mod trim;
