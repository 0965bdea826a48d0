//! Text analysis: normalization, per-letter breakdowns and per-word summaries.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod row;

// Re-export commonly used types
pub use analyzer::*;
pub use normalizer::{normalize, normalize_letter, normalize_opt};
pub use row::*;
