//! Raw tabular reference sources.
//!
//! Reference tables are delimited text files whose first row names the
//! columns:
//! ```csv
//! letter,value
//! ا,1
//! ب,2
//! ```
//!
//! [`RawTable`] keeps the cells verbatim so the triad table can be shown as
//! loaded. Column detection and numeric coercion helpers live here as well.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{AbjadError, Result};

/// A reference table file and how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    path: PathBuf,
    delimiter: u8,
}

impl TableSource {
    /// A comma-delimited source at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Whether the source file is absent.
    pub fn is_missing(&self) -> bool {
        !self.path.is_file()
    }

    /// Read the whole source.
    pub fn read(&self) -> Result<RawTable> {
        let file = File::open(&self.path)?;
        RawTable::from_reader(file, self.delimiter)
    }
}

/// Header row plus data rows, cells trimmed but otherwise untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse delimited text. Rows may have differing field counts.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(AbjadError::table("table header is empty"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        if rows.is_empty() {
            return Err(AbjadError::table("table has only a header, no data rows"));
        }

        Ok(Self { headers, rows })
    }

    /// Parse delimited text held in memory.
    pub fn parse(input: &str, delimiter: u8) -> Result<Self> {
        Self::from_reader(input.as_bytes(), delimiter)
    }

    /// The cell at `column` in `row`, or `""` when the row is short.
    pub fn cell<'a>(row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }

    /// First column whose header equals one of `aliases`, ignoring case.
    pub fn find_column(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            let alias = alias.to_lowercase();
            self.headers
                .iter()
                .position(|h| h.trim().to_lowercase() == alias)
        })
    }

    /// First column whose header contains `marker`.
    pub fn find_column_containing(&self, marker: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.contains(marker))
    }

    /// Resolve a set of columns: explicit matches first, then the remaining
    /// unclaimed columns in order for the slots that did not match.
    ///
    /// Fails when the table has too few columns to fill every slot.
    pub fn resolve_columns(&self, found: &[Option<usize>]) -> Result<Vec<usize>> {
        let mut claimed: Vec<usize> = found.iter().flatten().copied().collect();
        let mut resolved = Vec::with_capacity(found.len());
        for slot in found {
            let column = match slot {
                Some(column) => *column,
                None => {
                    let column = (0..self.headers.len())
                        .find(|c| !claimed.contains(c))
                        .ok_or_else(|| {
                            AbjadError::table(format!(
                                "expected at least {} columns, found {}",
                                found.len(),
                                self.headers.len()
                            ))
                        })?;
                    claimed.push(column);
                    column
                }
            };
            resolved.push(column);
        }
        Ok(resolved)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Best-effort numeric parse: integer, then float truncated toward zero.
///
/// Negative numbers clamp to 0. Returns `None` when neither parse succeeds.
pub fn try_coerce_value(cell: &str) -> Option<u64> {
    let cell = cell.trim();
    if let Ok(int_val) = cell.parse::<i64>() {
        return Some(int_val.max(0) as u64);
    }
    if let Ok(uint_val) = cell.parse::<u64>() {
        return Some(uint_val);
    }
    match cell.parse::<f64>() {
        Ok(float_val) if float_val.is_finite() => Some(float_val.trunc().max(0.0) as u64),
        _ => None,
    }
}

/// Like [`try_coerce_value`] but unparsable cells become 0.
pub fn coerce_value(cell: &str) -> u64 {
    try_coerce_value(cell).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let table = RawTable::parse("letter,value\nا,1\nب,2", b',').unwrap();
        assert_eq!(table.headers, vec!["letter", "value"]);
        assert_eq!(table.len(), 2);
        assert_eq!(RawTable::cell(&table.rows[1], 0), "ب");
        assert_eq!(RawTable::cell(&table.rows[1], 5), "");
    }

    #[test]
    fn test_parse_trims_and_flexible() {
        let table = RawTable::parse(" letter , value \n ا , 1 \nب\n", b',').unwrap();
        assert_eq!(table.headers, vec!["letter", "value"]);
        assert_eq!(table.rows[0], vec!["ا", "1"]);
        assert_eq!(table.rows[1], vec!["ب"]);
    }

    #[test]
    fn test_parse_custom_delimiter() {
        let table = RawTable::parse("letter\tvalue\nج\t3", b'\t').unwrap();
        assert_eq!(table.rows[0], vec!["ج", "3"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(RawTable::parse("", b',').is_err());
    }

    #[test]
    fn test_parse_header_only() {
        assert!(RawTable::parse("letter,value", b',').is_err());
    }

    #[test]
    fn test_find_column_case_insensitive() {
        let table = RawTable::parse("Char,VALUE\nا,1", b',').unwrap();
        assert_eq!(table.find_column(&["letter", "char"]), Some(0));
        assert_eq!(table.find_column(&["value", "val"]), Some(1));
        assert_eq!(table.find_column(&["element"]), None);
    }

    #[test]
    fn test_find_column_alias_priority() {
        let table = RawTable::parse("char,letter\nا,ب", b',').unwrap();
        // earlier alias wins regardless of column position
        assert_eq!(table.find_column(&["letter", "char"]), Some(1));
    }

    #[test]
    fn test_find_column_containing() {
        let table = RawTable::parse("الحرف,قيمة الروح\nا,1", b',').unwrap();
        assert_eq!(table.find_column_containing("حرف"), Some(0));
        assert_eq!(table.find_column_containing("روح"), Some(1));
        assert_eq!(table.find_column_containing("عقل"), None);
    }

    #[test]
    fn test_resolve_columns() {
        let table = RawTable::parse("a,b,value\n1,2,3", b',').unwrap();
        assert_eq!(table.resolve_columns(&[None, Some(2)]).unwrap(), vec![0, 2]);

        let table = RawTable::parse("value,a\n1,2", b',').unwrap();
        assert_eq!(table.resolve_columns(&[None, Some(0)]).unwrap(), vec![1, 0]);

        let table = RawTable::parse("only\n1", b',').unwrap();
        assert!(table.resolve_columns(&[None, None]).is_err());
    }

    #[test]
    fn test_coerce_value() {
        assert_eq!(coerce_value("40"), 40);
        assert_eq!(coerce_value(" 7 "), 7);
        assert_eq!(coerce_value("12.9"), 12);
        assert_eq!(coerce_value("1e3"), 1000);
        assert_eq!(coerce_value("N/A"), 0);
        assert_eq!(coerce_value(""), 0);
        assert_eq!(coerce_value("-5"), 0);
        assert_eq!(coerce_value("NaN"), 0);
        assert_eq!(try_coerce_value("N/A"), None);
        assert_eq!(try_coerce_value("0"), Some(0));
    }

    #[test]
    fn test_missing_source() {
        let source = TableSource::new("/nonexistent/abjad_values.csv");
        assert!(source.is_missing());
        assert!(source.read().is_err());
    }
}
