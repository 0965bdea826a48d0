//! Three-part letter attributes: spirit (روح), mind (عقل) and self (نفس).

use std::ops::{Add, AddAssign};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The three numeric sub-values attached to a letter.
///
/// `soul` carries the self (نفس) dimension; `self` is reserved in Rust.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triad {
    pub spirit: u64,
    pub mind: u64,
    pub soul: u64,
}

impl Triad {
    pub fn new(spirit: u64, mind: u64, soul: u64) -> Self {
        Self { spirit, mind, soul }
    }

    /// Sum of the three sub-values, saturating at `u64::MAX`.
    pub fn sum(&self) -> u64 {
        self.spirit.saturating_add(self.mind).saturating_add(self.soul)
    }
}

/// Component-wise saturating addition.
impl Add for Triad {
    type Output = Triad;

    fn add(self, rhs: Triad) -> Triad {
        Triad::new(
            self.spirit.saturating_add(rhs.spirit),
            self.mind.saturating_add(rhs.mind),
            self.soul.saturating_add(rhs.soul),
        )
    }
}

impl AddAssign for Triad {
    fn add_assign(&mut self, rhs: Triad) {
        *self = *self + rhs;
    }
}

/// Immutable mapping from normalized letter to its triad.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriadTable {
    entries: AHashMap<char, Triad>,
}

impl TriadTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, letter: char, triad: Triad) {
        self.entries.insert(letter, triad);
    }

    /// Look up a letter; unmapped letters yield all zeros.
    pub fn get(&self, letter: char) -> Triad {
        self.entries.get(&letter).copied().unwrap_or_default()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.entries.contains_key(&letter)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(char, Triad)> for TriadTable {
    fn from_iter<I: IntoIterator<Item = (char, Triad)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
