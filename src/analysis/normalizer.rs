//! Arabic text normalization.
//!
//! The [`Normalizer`] chains [`CharFilter`]s into the canonical form used for
//! every table lookup:
//!
//! 1. Trim leading/trailing whitespace
//! 2. Strip diacritics, Quranic annotation marks and tatweel
//! 3. Remove the right-to-left mark
//! 4. Fold alef variants (أ إ آ) to ا and alef maqsura (ى) to ي
//! 5. Drop everything outside the Arabic block (U+0600–U+06FF) except plain spaces
//! 6. Trim again, since step 5 can expose edge spaces
//!
//! The result is idempotent: normalizing twice equals normalizing once.
//!
//! # Examples
//!
//! ```
//! use abjad::analysis::normalizer::{normalize, normalize_letter};
//!
//! assert_eq!(normalize("  أَحْمَد "), "احمد");
//! assert_eq!(normalize("Hello"), "");
//! assert_eq!(normalize_letter('إ'), Some('ا'));
//! assert_eq!(normalize_letter('\u{064E}'), None);
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::trim::TrimCharFilter;
use crate::error::Result;

/// Tatweel (kashida), the elongation character.
pub const TATWEEL: char = '\u{0640}';

/// Right-to-left mark.
pub const RIGHT_TO_LEFT_MARK: char = '\u{200F}';

/// Bare alef, the fold target of the hamza and madda variants.
pub const ALEF: char = 'ا';

/// Alef variants folded onto [`ALEF`].
pub const ALEF_VARIANTS: [char; 3] = ['أ', 'إ', 'آ'];

/// Alef maqsura, folded onto [`YEH`].
pub const ALEF_MAQSURA: char = 'ى';

/// Standard yā.
pub const YEH: char = 'ي';

/// Inclusive ranges of combining marks removed during normalization.
const MARK_RANGES: &[(char, char)] = &[
    ('\u{064B}', '\u{065F}'), // tanween, harakat, shadda, sukun, combining hamza
    ('\u{0640}', '\u{0640}'), // tatweel
    ('\u{0670}', '\u{0670}'), // superscript alef
    ('\u{06D6}', '\u{06DC}'),
    ('\u{06DF}', '\u{06E8}'),
    ('\u{06EA}', '\u{06ED}'),
];

const ARABIC_BLOCK: (char, char) = ('\u{0600}', '\u{06FF}');

/// Whether `c` is stripped as a diacritic, annotation mark or tatweel.
pub fn is_arabic_mark(c: char) -> bool {
    MARK_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Whether `c` lies in the Arabic Unicode block.
pub fn is_arabic_block(c: char) -> bool {
    (ARABIC_BLOCK.0..=ARABIC_BLOCK.1).contains(&c)
}

fn mark_pattern() -> String {
    let mut pattern = String::from("[");
    for &(lo, hi) in MARK_RANGES {
        if lo == hi {
            pattern.push_str(&format!("\\x{{{:04X}}}", lo as u32));
        } else {
            pattern.push_str(&format!("\\x{{{:04X}}}-\\x{{{:04X}}}", lo as u32, hi as u32));
        }
    }
    pattern.push(']');
    pattern
}

fn non_arabic_pattern() -> String {
    format!(
        "[^\\x{{{:04X}}}-\\x{{{:04X}}} ]+",
        ARABIC_BLOCK.0 as u32, ARABIC_BLOCK.1 as u32
    )
}

/// An ordered chain of char filters plus the single-letter folding table.
#[derive(Clone, Default)]
pub struct Normalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    letter_folding: MappingCharFilter,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("char_filters", &self.filter_names())
            .finish()
    }
}

impl Normalizer {
    /// Create an empty normalizer that returns its input unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard Arabic normalization pipeline.
    pub fn try_arabic() -> Result<Self> {
        let folding = MappingCharFilter::folding(ALEF_VARIANTS, ALEF)
            .merge(MappingCharFilter::folding([ALEF_MAQSURA], YEH))
            .with_name("letter_folding");

        Ok(Self::new()
            .add_char_filter(Arc::new(TrimCharFilter::new()))
            .add_char_filter(Arc::new(
                PatternReplaceCharFilter::remove(&mark_pattern())?.with_name("strip_marks"),
            ))
            .add_char_filter(Arc::new(
                MappingCharFilter::deleting([RIGHT_TO_LEFT_MARK]).with_name("strip_rlm"),
            ))
            .add_char_filter(Arc::new(folding.clone()))
            .add_char_filter(Arc::new(
                PatternReplaceCharFilter::remove(&non_arabic_pattern())?.with_name("arabic_only"),
            ))
            .add_char_filter(Arc::new(TrimCharFilter::new()))
            .with_letter_folding(folding))
    }

    /// The standard Arabic pipeline. Its patterns are constant, so building it cannot fail.
    pub fn arabic() -> Self {
        Self::try_arabic().expect("built-in normalization patterns are valid")
    }

    /// Append a char filter to the chain.
    pub fn add_char_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(filter);
        self
    }

    /// Set the folding table used by [`Normalizer::normalize_letter`].
    pub fn with_letter_folding(mut self, folding: MappingCharFilter) -> Self {
        self.letter_folding = folding;
        self
    }

    /// Names of the char filters in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.char_filters.iter().map(|f| f.name()).collect()
    }

    /// Run `text` through every char filter in order.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = text.to_string();
        for filter in &self.char_filters {
            current = filter.filter(&current);
        }
        current
    }

    /// Normalize a single letter: strip marks and fold variants.
    ///
    /// Returns `None` when `c` is itself a stripped mark. No script filtering
    /// is applied.
    pub fn normalize_letter(&self, c: char) -> Option<char> {
        if is_arabic_mark(c) {
            return None;
        }
        self.letter_folding.map_char(c)
    }

    /// Normalize a table cell expected to hold one letter.
    ///
    /// Returns the letter when exactly one character survives normalization.
    pub fn normalize_letter_cell(&self, cell: &str) -> Option<char> {
        let mut letters = cell
            .trim()
            .chars()
            .filter(|c| *c != RIGHT_TO_LEFT_MARK)
            .filter_map(|c| self.normalize_letter(c));
        match (letters.next(), letters.next()) {
            (Some(letter), None) => Some(letter),
            _ => None,
        }
    }
}

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::arabic);

/// The process-wide standard Arabic normalizer.
pub fn default_normalizer() -> &'static Normalizer {
    &DEFAULT_NORMALIZER
}

/// Normalize text with the standard Arabic pipeline.
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// Normalize optional text; absent input normalizes to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Normalize a single letter with the standard folding table.
pub fn normalize_letter(c: char) -> Option<char> {
    DEFAULT_NORMALIZER.normalize_letter(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(Normalizer::try_arabic().is_ok());
    }

    #[test]
    fn test_filter_order() {
        assert_eq!(
            Normalizer::arabic().filter_names(),
            vec!["trim", "strip_marks", "strip_rlm", "letter_folding", "arabic_only", "trim"]
        );
    }

    #[test]
    fn test_hamza_alef_folded() {
        assert_eq!(normalize("أحمد"), "احمد");
        assert_eq!(normalize("إيمان"), "ايمان");
        assert_eq!(normalize("آمنة"), "امنة");
    }

    #[test]
    fn test_alef_maqsura_folded() {
        assert_eq!(normalize("مصطفى"), "مصطفي");
    }

    #[test]
    fn test_diacritics_and_tatweel_stripped() {
        assert_eq!(normalize("اللّٰه"), "الله");
        assert_eq!(normalize("مُحَمَّد"), "محمد");
        assert_eq!(normalize("جـــميل"), "جميل");
        assert_eq!(normalize("كِتَابٌ"), "كتاب");
    }

    #[test]
    fn test_rtl_mark_removed() {
        assert_eq!(normalize("\u{200F}علي\u{200F}"), "علي");
    }

    #[test]
    fn test_non_arabic_removed() {
        assert_eq!(normalize("abc 123"), "");
        assert_eq!(normalize("Ali علي!"), "علي");
        assert_eq!(normalize("محمد\tعلي"), "محمدعلي");
    }

    #[test]
    fn test_inner_spaces_kept() {
        assert_eq!(normalize(" محمد علي "), "محمد علي");
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("أ")), "ا");
    }

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('أ'), Some('ا'));
        assert_eq!(normalize_letter('ى'), Some('ي'));
        assert_eq!(normalize_letter('ب'), Some('ب'));
        assert_eq!(normalize_letter(TATWEEL), None);
        assert_eq!(normalize_letter('\u{0651}'), None);
        // no script filtering for single letters
        assert_eq!(normalize_letter('x'), Some('x'));
    }

    #[test]
    fn test_normalize_letter_cell() {
        let normalizer = default_normalizer();
        assert_eq!(normalizer.normalize_letter_cell(" إ "), Some('ا'));
        assert_eq!(normalizer.normalize_letter_cell("بَ"), Some('ب'));
        assert_eq!(normalizer.normalize_letter_cell(""), None);
        assert_eq!(normalizer.normalize_letter_cell("اب"), None);
    }

    #[test]
    fn test_empty_normalizer_is_identity() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize(" Abc "), " Abc ");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "   ",
            "abc احمد",
            "احمد abc",
            "x ا y",
            "أَحْمَد\u{200F}",
            "اللّٰه أكبر",
            "١٢٣ عدد",
            "؟ سؤال ؟",
            "ـــ",
            "a\u{0651}b",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_output_is_arabic_or_space() {
        let samples = ["Hello, عالم!", "\u{FEFB} لا", "emoji 😀 قلب", "日本 عرب"];
        for s in samples {
            for c in normalize(s).chars() {
                assert!(c == ' ' || is_arabic_block(c), "unexpected {c:?} from {s:?}");
            }
        }
    }
}
