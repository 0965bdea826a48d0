use ahash::AHashMap;

use super::CharFilter;

/// A char filter that rewrites individual characters.
///
/// Each mapped character is replaced by its target, or deleted when the
/// target is `None`. Unmapped characters pass through unchanged.
#[derive(Clone, Debug, Default)]
pub struct MappingCharFilter {
    mapping: AHashMap<char, Option<char>>,
    name: &'static str,
}

impl MappingCharFilter {
    pub fn new<I>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (char, Option<char>)>,
    {
        Self {
            mapping: mapping.into_iter().collect(),
            name: "mapping",
        }
    }

    /// Create a filter that deletes every listed character.
    pub fn deleting<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self::new(chars.into_iter().map(|c| (c, None)))
    }

    /// Create a filter that folds every listed character onto `target`.
    pub fn folding<I>(chars: I, target: char) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self::new(chars.into_iter().map(|c| (c, Some(target))))
    }

    /// Merge the entries of `other` into this filter. Later entries win.
    pub fn merge(mut self, other: MappingCharFilter) -> Self {
        self.mapping.extend(other.mapping);
        self
    }

    /// Override the name reported by [`CharFilter::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Map a single character. `None` means the character is deleted.
    pub fn map_char(&self, c: char) -> Option<char> {
        match self.mapping.get(&c) {
            Some(target) => *target,
            None => Some(c),
        }
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter_map(|c| self.map_char(c)).collect()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
