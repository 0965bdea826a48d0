//! Result types produced by the analyzer.
//!
//! Everything here is transient: built per analysis call and handed to the
//! caller for display or export.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tables::element::{Element, element_label};
use crate::tables::triad::Triad;

/// One distinct letter's contribution to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub letter: char,
    pub value: u64,
    /// `None` when the letter has no element assignment.
    pub element: Option<Element>,
}

impl AnalysisRow {
    /// The element label, or "unknown".
    pub fn element_label(&self) -> &'static str {
        element_label(self.element)
    }
}

/// Value/element breakdown of one word (or of a whole text treated as one word).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// The normalized input.
    pub normalized: String,
    /// One row per distinct letter, in first-occurrence order.
    pub rows: Vec<AnalysisRow>,
    /// Sum of the row values.
    pub total: u64,
}

impl WordAnalysis {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct letters.
    pub fn unique_letters(&self) -> usize {
        self.rows.len()
    }

    /// Count of distinct letters per element.
    pub fn element_counts(&self) -> ElementCounts {
        self.rows.iter().filter_map(|row| row.element).collect()
    }
}

/// Distinct-letter counts per element; letters with no element are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts {
    pub fire: usize,
    pub earth: usize,
    pub air: usize,
    pub water: usize,
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> usize {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    pub fn increment(&mut self, element: Element) {
        match element {
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Air => self.air += 1,
            Element::Water => self.water += 1,
        }
    }

    /// Counts in [`Element::ALL`] order.
    pub fn as_array(&self) -> [usize; 4] {
        Element::ALL.map(|element| self.get(element))
    }

    pub fn total(&self) -> usize {
        self.as_array().iter().sum()
    }
}

impl FromIterator<Element> for ElementCounts {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut counts = ElementCounts::default();
        for element in iter {
            counts.increment(element);
        }
        counts
    }
}

/// Per-word summary line of a multi-word analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSummary {
    /// The normalized word.
    pub word: String,
    pub total: u64,
    /// Count of distinct letters, not characters. Exported as `unique_len`.
    pub unique_letters: usize,
    pub elements: ElementCounts,
}

impl From<&WordAnalysis> for WordSummary {
    fn from(analysis: &WordAnalysis) -> Self {
        Self {
            word: analysis.normalized.clone(),
            total: analysis.total,
            unique_letters: analysis.unique_letters(),
            elements: analysis.element_counts(),
        }
    }
}

/// Label of a triad breakdown row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLabel {
    Letter(char),
    /// The trailing whole-text totals row.
    Total,
}

/// Arabic label used for the totals row in displays and exports.
pub const TOTAL_LABEL: &str = "المجموع";

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLabel::Letter(c) => write!(f, "{c}"),
            RowLabel::Total => f.write_str(TOTAL_LABEL),
        }
    }
}

/// One row of a triad breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriadRow {
    pub label: RowLabel,
    pub spirit: u64,
    pub mind: u64,
    pub soul: u64,
    /// spirit + mind + soul
    pub sum: u64,
}

impl TriadRow {
    pub fn letter(letter: char, triad: Triad) -> Self {
        Self::with_label(RowLabel::Letter(letter), triad)
    }

    pub fn total(triad: Triad) -> Self {
        Self::with_label(RowLabel::Total, triad)
    }

    fn with_label(label: RowLabel, triad: Triad) -> Self {
        Self {
            label,
            spirit: triad.spirit,
            mind: triad.mind,
            soul: triad.soul,
            sum: triad.sum(),
        }
    }

    pub fn is_total(&self) -> bool {
        self.label == RowLabel::Total
    }

    pub fn triad(&self) -> Triad {
        Triad::new(self.spirit, self.mind, self.soul)
    }
}

/// Triad breakdown of a word or text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriadAnalysis {
    pub normalized: String,
    /// Letter rows in first-occurrence order, then one totals row. Empty when
    /// there are no letters or no triad table.
    pub rows: Vec<TriadRow>,
}

impl TriadAnalysis {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The trailing totals row, if any.
    pub fn total(&self) -> Option<&TriadRow> {
        self.rows.last().filter(|row| row.is_total())
    }

    /// Rows excluding the totals row.
    pub fn letter_rows(&self) -> &[TriadRow] {
        match self.total() {
            Some(_) => &self.rows[..self.rows.len() - 1],
            None => &self.rows,
        }
    }
}
