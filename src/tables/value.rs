//! Letter → Abjad numeral table.

use ahash::AHashMap;

/// Immutable mapping from normalized letter to its Abjad value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterValueTable {
    entries: AHashMap<char, u64>,
}

impl LetterValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `letter`.
    pub fn insert(&mut self, letter: char, value: u64) {
        self.entries.insert(letter, value);
    }

    /// Look up a letter; unmapped letters are worth 0.
    pub fn get(&self, letter: char) -> u64 {
        self.entries.get(&letter).copied().unwrap_or(0)
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

    /// Entries sorted by value, then letter.
    pub fn entries(&self) -> Vec<(char, u64)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(c, v)| (*c, *v)).collect();
        entries.sort_unstable_by_key(|&(c, v)| (v, c));
        entries
    }
}

impl FromIterator<(char, u64)> for LetterValueTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_defaults_to_zero() {
        let table: LetterValueTable = [('ا', 1), ('ب', 2)].into_iter().collect();
        assert_eq!(table.get('ب'), 2);
        assert_eq!(table.get('ة'), 0);
        assert!(!table.contains('ة'));
    }

    #[test]
    fn test_entries_sorted_by_value() {
        let table: LetterValueTable = [('غ', 1000), ('ا', 1), ('ي', 10)].into_iter().collect();
        assert_eq!(table.entries(), vec![('ا', 1), ('ي', 10), ('غ', 1000)]);
    }
}
