//! The four classical elements and the letter → element table.

use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{AbjadError, Result};

/// Label rendered for letters that have no element assignment.
pub const UNKNOWN_ELEMENT: &str = "unknown";

/// One of the four elemental categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// All elements in display order (نار، تراب، هواء، ماء).
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    /// The Arabic label used in reference tables and exports.
    pub fn arabic(self) -> &'static str {
        match self {
            Element::Fire => "نار",
            Element::Earth => "تراب",
            Element::Air => "هواء",
            Element::Water => "ماء",
        }
    }

    /// The English label.
    pub fn english(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }

    /// Position in [`Element::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arabic())
    }
}

impl FromStr for Element {
    type Err = AbjadError;

    /// Parse an Arabic or English label. A leading definite article (ال) is accepted.
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        let label = label.strip_prefix("ال").unwrap_or(label);
        let lower = label.to_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.arabic() == label || e.english() == lower)
            .ok_or_else(|| AbjadError::table(format!("Unrecognized element label: {s:?}")))
    }
}

/// Render an optional element, using [`UNKNOWN_ELEMENT`] for `None`.
pub fn element_label(element: Option<Element>) -> &'static str {
    element.map(Element::arabic).unwrap_or(UNKNOWN_ELEMENT)
}

/// Immutable mapping from normalized letter to element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTable {
    entries: AHashMap<char, Element>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the element for `letter`.
    pub fn insert(&mut self, letter: char, element: Element) {
        self.entries.insert(letter, element);
    }

    /// Drop the mapping for `letter`, returning it if present.
    pub fn remove(&mut self, letter: char) -> Option<Element> {
        self.entries.remove(&letter)
    }

    /// Look up a letter. `None` means unknown.
    pub fn get(&self, letter: char) -> Option<Element> {
        self.entries.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by letter.
    pub fn entries(&self) -> Vec<(char, Element)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(c, e)| (*c, *e)).collect();
        entries.sort_unstable();
        entries
    }
}

impl FromIterator<(char, Element)> for ElementTable {
    fn from_iter<I: IntoIterator<Item = (char, Element)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
