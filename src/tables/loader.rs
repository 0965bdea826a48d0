//! Reference table loading.
//!
//! Each loader reads its source once and either returns a table or `None`,
//! which tells the caller to fall back to a built-in table (values, elements)
//! or to disable the feature (triads). Missing and malformed sources are
//! expected conditions and are logged, never raised.
//!
//! Column detection:
//!
//! - value/element tables match headers exactly (case-insensitive) against
//!   alias lists
//! - the triad table matches headers by substring on Arabic markers
//! - any slot that does not match takes the next unclaimed column in order
//!
//! Letter cells are normalized with the standard normalizer in all three loaders.

use std::io::ErrorKind;

use log::{debug, info, warn};

use crate::analysis::normalizer::default_normalizer;
use crate::error::{AbjadError, Result};
use crate::tables::element::{Element, ElementTable};
use crate::tables::raw::{RawTable, TableSource, try_coerce_value};
use crate::tables::triad::{Triad, TriadTable};
use crate::tables::value::LetterValueTable;

/// Header aliases for the letter column, in priority order.
pub const LETTER_HEADERS: &[&str] = &["letter", "char", "حرف", "الحرف"];

/// Header aliases for the value column.
pub const VALUE_HEADERS: &[&str] = &["value", "val", "قيمة", "القيمة"];

/// Header aliases for the element column.
pub const ELEMENT_HEADERS: &[&str] = &["element", "عنصر", "العنصر"];

/// Substring marking the triad letter column.
pub const TRIAD_LETTER_MARKER: &str = "حرف";

/// Substring marking the spirit column.
pub const SPIRIT_MARKER: &str = "روح";

/// Substring marking the mind column.
pub const MIND_MARKER: &str = "عقل";

/// Substring marking the self column.
pub const SELF_MARKER: &str = "نفس";

fn letter_key(cell: &str, row_number: usize) -> Option<char> {
    if cell.trim().is_empty() {
        return None;
    }
    let letter = default_normalizer().normalize_letter_cell(cell);
    if letter.is_none() {
        warn!("Row {row_number}: {cell:?} is not a single letter, skipping");
    }
    letter
}

fn numeric_cell(cell: &str, row_number: usize, column: &str) -> u64 {
    match try_coerce_value(cell) {
        Some(value) => value,
        None => {
            warn!("Row {row_number}: non-numeric {column} {cell:?}, using 0");
            0
        }
    }
}

/// Build a value table from parsed rows.
pub fn value_table_from_raw(raw: &RawTable) -> Result<LetterValueTable> {
    let found = [raw.find_column(LETTER_HEADERS), raw.find_column(VALUE_HEADERS)];
    let columns = raw.resolve_columns(&found)?;
    let (letter_col, value_col) = (columns[0], columns[1]);
    debug!("Value table columns: letter={letter_col}, value={value_col}");

    let mut table = LetterValueTable::new();
    for (i, row) in raw.rows.iter().enumerate() {
        let row_number = i + 2;
        let Some(letter) = letter_key(RawTable::cell(row, letter_col), row_number) else {
            continue;
        };
        let value = numeric_cell(RawTable::cell(row, value_col), row_number, "value");
        table.insert(letter, value);
    }
    Ok(table)
}

/// Build an element table from parsed rows. Unrecognized labels are skipped.
pub fn element_table_from_raw(raw: &RawTable) -> Result<ElementTable> {
    let found = [raw.find_column(LETTER_HEADERS), raw.find_column(ELEMENT_HEADERS)];
    let columns = raw.resolve_columns(&found)?;
    let (letter_col, element_col) = (columns[0], columns[1]);
    debug!("Element table columns: letter={letter_col}, element={element_col}");

    let mut table = ElementTable::new();
    for (i, row) in raw.rows.iter().enumerate() {
        let row_number = i + 2;
        let Some(letter) = letter_key(RawTable::cell(row, letter_col), row_number) else {
            continue;
        };
        match RawTable::cell(row, element_col).parse::<Element>() {
            Ok(element) => table.insert(letter, element),
            Err(e) => {
                // a later row overrides earlier ones, even when it is unusable
                if table.remove(letter).is_some() {
                    warn!("Row {row_number}: {e}, dropping earlier mapping for {letter}");
                } else {
                    warn!("Row {row_number}: {e}, leaving {letter} unmapped");
                }
            }
        }
    }
    Ok(table)
}

/// Build a triad table from parsed rows.
pub fn triad_table_from_raw(raw: &RawTable) -> Result<TriadTable> {
    let found = [
        raw.find_column_containing(TRIAD_LETTER_MARKER),
        raw.find_column_containing(SPIRIT_MARKER),
        raw.find_column_containing(MIND_MARKER),
        raw.find_column_containing(SELF_MARKER),
    ];
    let columns = raw.resolve_columns(&found)?;
    let (letter_col, spirit_col, mind_col, self_col) =
        (columns[0], columns[1], columns[2], columns[3]);
    debug!(
        "Triad table columns: letter={letter_col}, spirit={spirit_col}, \
         mind={mind_col}, self={self_col}"
    );

    let mut table = TriadTable::new();
    for (i, row) in raw.rows.iter().enumerate() {
        let row_number = i + 2;
        let Some(letter) = letter_key(RawTable::cell(row, letter_col), row_number) else {
            continue;
        };
        let triad = Triad::new(
            numeric_cell(RawTable::cell(row, spirit_col), row_number, "spirit"),
            numeric_cell(RawTable::cell(row, mind_col), row_number, "mind"),
            numeric_cell(RawTable::cell(row, self_col), row_number, "self"),
        );
        table.insert(letter, triad);
    }
    Ok(table)
}

fn finish<T>(
    result: Result<T>,
    source: &TableSource,
    kind: &str,
    len: impl Fn(&T) -> usize,
) -> Option<T> {
    let path = source.path().display();
    match result {
        Ok(table) => {
            info!("Loaded {} {kind} entries from {path}", len(&table));
            Some(table)
        }
        Err(AbjadError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!("No {kind} table at {path}");
            None
        }
        Err(e) => {
            warn!("Unusable {kind} table {path}: {e}");
            None
        }
    }
}

/// Load the value table, or `None` to signal the built-in fallback.
pub fn load_value_table(source: &TableSource) -> Option<LetterValueTable> {
    let result = source.read().and_then(|raw| value_table_from_raw(&raw));
    finish(result, source, "value", LetterValueTable::len)
}

/// Load the element table, or `None` to signal the built-in fallback.
pub fn load_element_table(source: &TableSource) -> Option<ElementTable> {
    let result = source.read().and_then(|raw| element_table_from_raw(&raw));
    finish(result, source, "element", ElementTable::len)
}

/// Load the triad table together with its verbatim rows.
///
/// Both are `None` when the source is missing or unusable; triad analysis is
/// then disabled.
pub fn load_triad_table(source: &TableSource) -> (Option<TriadTable>, Option<RawTable>) {
    let result = source
        .read()
        .and_then(|raw| triad_table_from_raw(&raw).map(|table| (table, raw)));
    match finish(result, source, "triad", |loaded: &(TriadTable, RawTable)| loaded.0.len()) {
        Some((table, raw)) => (Some(table), Some(raw)),
        None => (None, None),
    }
}
