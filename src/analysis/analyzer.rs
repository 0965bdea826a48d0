//! Word and text analysis over the reference tables.
//!
//! Letters are deduplicated per call: only the first occurrence of a letter
//! contributes, and rows keep first-occurrence order.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use abjad::analysis::analyzer::AbjadAnalyzer;
//! use abjad::tables::ReferenceTables;
//!
//! let analyzer = AbjadAnalyzer::new(Arc::new(ReferenceTables::builtin()));
//!
//! let analysis = analyzer.analyze_unique_value("أحمد");
//! assert_eq!(analysis.normalized, "احمد");
//! assert_eq!(analysis.total, 53);
//!
//! let summaries = analyzer.analyze_text("محمد علي");
//! assert_eq!(summaries.len(), 2);
//! assert_eq!(summaries[1].total, 110);
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::normalizer::{Normalizer, default_normalizer};
use crate::analysis::row::{AnalysisRow, TriadAnalysis, TriadRow, WordAnalysis, WordSummary};
use crate::tables::ReferenceTables;
use crate::tables::triad::Triad;

/// Distinct non-space letters of already-normalized text, in first-occurrence order.
pub fn unique_letters(normalized: &str) -> Vec<char> {
    let mut seen = AHashSet::new();
    normalized
        .chars()
        .filter(|c| *c != ' ' && seen.insert(*c))
        .collect()
}

/// Analyzer bound to a set of reference tables.
#[derive(Debug, Clone)]
pub struct AbjadAnalyzer {
    tables: Arc<ReferenceTables>,
    normalizer: Normalizer,
}

impl AbjadAnalyzer {
    /// Create an analyzer using the standard Arabic normalizer.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self {
            tables,
            normalizer: default_normalizer().clone(),
        }
    }

    /// Replace the normalizer.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    fn breakdown(&self, normalized: String) -> WordAnalysis {
        let rows: Vec<AnalysisRow> = unique_letters(&normalized)
            .into_iter()
            .map(|letter| AnalysisRow {
                letter,
                value: self.tables.values().get(letter),
                element: self.tables.elements().get(letter),
            })
            .collect();
        let total = rows.iter().map(|row| row.value).fold(0, u64::saturating_add);
        WordAnalysis {
            normalized,
            rows,
            total,
        }
    }

    /// Value and element of each distinct letter of `word`, plus their total.
    pub fn analyze_unique_value(&self, word: &str) -> WordAnalysis {
        self.breakdown(self.normalize(word))
    }

    /// Treat the whole of `text` as a single word.
    pub fn analyze_whole_text(&self, text: &str) -> WordAnalysis {
        self.analyze_unique_value(text)
    }

    /// Triad breakdown of `word` with a trailing totals row.
    ///
    /// Empty when the triad table is unavailable or the word has no letters.
    pub fn analyze_triad(&self, word: &str) -> TriadAnalysis {
        let normalized = self.normalize(word);
        let Some(triads) = self.tables.triads() else {
            return TriadAnalysis {
                normalized,
                rows: Vec::new(),
            };
        };

        let mut rows = Vec::new();
        let mut total = Triad::default();
        for letter in unique_letters(&normalized) {
            let triad = triads.get(letter);
            total += triad;
            rows.push(TriadRow::letter(letter, triad));
        }
        if !rows.is_empty() {
            rows.push(TriadRow::total(total));
        }

        TriadAnalysis { normalized, rows }
    }

    /// Per-word summaries of multi-word text, in input order.
    pub fn analyze_text(&self, text: &str) -> Vec<WordSummary> {
        self.normalize(text)
            .split_whitespace()
            .map(|word| WordSummary::from(&self.breakdown(word.to_string())))
            .collect()
    }
}
