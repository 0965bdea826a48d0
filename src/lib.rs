//! # Abjad
//!
//! Abjad letter-value sums and elemental classification for Arabic text.
//!
//! ## Features
//!
//! - Deterministic, idempotent Arabic normalization (diacritics, tatweel, letter variants)
//! - Table-driven letter values, elements and spirit/mind/self triads
//! - Reference tables loaded from CSV with built-in fallbacks
//! - Duplicate-aware per-word and whole-text aggregation
//! - CSV export of per-word summaries

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod tables;

pub mod prelude {
    pub use crate::analysis::analyzer::AbjadAnalyzer;
    pub use crate::analysis::normalizer::{normalize, normalize_letter};
    pub use crate::analysis::row::{
        AnalysisRow, ElementCounts, RowLabel, TriadAnalysis, TriadRow, WordAnalysis, WordSummary,
    };
    pub use crate::config::AbjadConfig;
    pub use crate::error::{AbjadError, Result};
    pub use crate::tables::ReferenceTables;
    pub use crate::tables::element::Element;
    pub use crate::tables::triad::Triad;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
