//! Built-in tables used when no reference file is available.

use crate::analysis::normalizer::normalize_letter;
use crate::tables::element::{Element, ElementTable};
use crate::tables::value::LetterValueTable;

/// Classical (mashriqi) Abjad values, including the alef variants and both yā forms.
pub const ABJAD_VALUES: [(char, u64); 32] = [
    ('ا', 1),
    ('أ', 1),
    ('إ', 1),
    ('آ', 1),
    ('ب', 2),
    ('ج', 3),
    ('د', 4),
    ('ه', 5),
    ('و', 6),
    ('ز', 7),
    ('ح', 8),
    ('ط', 9),
    ('ي', 10),
    ('ى', 10),
    ('ك', 20),
    ('ل', 30),
    ('م', 40),
    ('ن', 50),
    ('س', 60),
    ('ع', 70),
    ('ف', 80),
    ('ص', 90),
    ('ق', 100),
    ('ر', 200),
    ('ش', 300),
    ('ت', 400),
    ('ث', 500),
    ('خ', 600),
    ('ذ', 700),
    ('ض', 800),
    ('ظ', 900),
    ('غ', 1000),
];

/// Elemental assignment. Elements cycle fire, earth, air, water along the Abjad order.
pub const ELEMENTS: [(char, Element); 29] = [
    ('ا', Element::Fire),
    ('ه', Element::Fire),
    ('ط', Element::Fire),
    ('م', Element::Fire),
    ('ف', Element::Fire),
    ('ش', Element::Fire),
    ('ذ', Element::Fire),
    ('ب', Element::Earth),
    ('و', Element::Earth),
    ('ي', Element::Earth),
    ('ى', Element::Earth),
    ('ن', Element::Earth),
    ('ص', Element::Earth),
    ('ت', Element::Earth),
    ('ض', Element::Earth),
    ('ج', Element::Air),
    ('ز', Element::Air),
    ('ك', Element::Air),
    ('س', Element::Air),
    ('ق', Element::Air),
    ('ث', Element::Air),
    ('ظ', Element::Air),
    ('د', Element::Water),
    ('ح', Element::Water),
    ('ل', Element::Water),
    ('ع', Element::Water),
    ('ر', Element::Water),
    ('خ', Element::Water),
    ('غ', Element::Water),
];

/// The built-in value table, keyed by normalized letter.
pub fn builtin_value_table() -> LetterValueTable {
    ABJAD_VALUES
        .iter()
        .filter_map(|&(c, v)| normalize_letter(c).map(|c| (c, v)))
        .collect()
}

/// The built-in element table, keyed by normalized letter.
pub fn builtin_element_table() -> ElementTable {
    ELEMENTS
        .iter()
        .filter_map(|&(c, e)| normalize_letter(c).map(|c| (c, e)))
        .collect()
}
