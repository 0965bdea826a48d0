//! Reference tables: letter values, elements and triads.
//!
//! The three tables are built once, either from files named by
//! [`AbjadConfig`] or from the built-in defaults, and are read-only afterwards.
//! [`ReferenceTables`] bundles them for the analyzer.
//!
//! # Examples
//!
//! ```
//! use abjad::tables::ReferenceTables;
//!
//! let tables = ReferenceTables::builtin();
//! assert_eq!(tables.values().get('غ'), 1000);
//! assert!(tables.triads().is_none());
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::AbjadConfig;
use crate::tables::element::ElementTable;
use crate::tables::fallback::{builtin_element_table, builtin_value_table};
use crate::tables::loader::{load_element_table, load_triad_table, load_value_table};
use crate::tables::raw::RawTable;
use crate::tables::triad::TriadTable;
use crate::tables::value::LetterValueTable;

pub mod element;
pub mod fallback;
pub mod loader;
pub mod raw;
pub mod triad;
pub mod value;

/// Where a table came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum TableOrigin {
    /// Loaded from a reference file.
    File(PathBuf),
    /// The built-in fallback.
    BuiltIn,
    /// Supplied directly by the caller.
    Provided,
    /// Not available; the dependent feature is disabled.
    Unavailable,
}

impl fmt::Display for TableOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableOrigin::File(path) => write!(f, "{}", path.display()),
            TableOrigin::BuiltIn => f.write_str("built-in"),
            TableOrigin::Provided => f.write_str("provided"),
            TableOrigin::Unavailable => f.write_str("not available"),
        }
    }
}

/// Origin of each of the three tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOrigins {
    pub values: TableOrigin,
    pub elements: TableOrigin,
    pub triads: TableOrigin,
}

/// The immutable lookup tables shared by every analysis call.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    values: LetterValueTable,
    elements: ElementTable,
    triads: Option<TriadTable>,
    raw_triads: Option<RawTable>,
    origins: TableOrigins,
}

impl ReferenceTables {
    /// Caller-supplied tables, for embedding and tests.
    pub fn new(
        values: LetterValueTable,
        elements: ElementTable,
        triads: Option<TriadTable>,
    ) -> Self {
        let triad_origin = if triads.is_some() {
            TableOrigin::Provided
        } else {
            TableOrigin::Unavailable
        };
        Self {
            values,
            elements,
            triads,
            raw_triads: None,
            origins: TableOrigins {
                values: TableOrigin::Provided,
                elements: TableOrigin::Provided,
                triads: triad_origin,
            },
        }
    }

    /// Built-in value and element tables, no triads.
    pub fn builtin() -> Self {
        Self {
            values: builtin_value_table(),
            elements: builtin_element_table(),
            triads: None,
            raw_triads: None,
            origins: TableOrigins {
                values: TableOrigin::BuiltIn,
                elements: TableOrigin::BuiltIn,
                triads: TableOrigin::Unavailable,
            },
        }
    }

    /// Load every table named by `config`, falling back per table.
    pub fn load(config: &AbjadConfig) -> Self {
        let value_source = config.value_source();
        let (values, values_origin) = match load_value_table(&value_source) {
            Some(table) => (table, TableOrigin::File(value_source.path().to_path_buf())),
            None => (builtin_value_table(), TableOrigin::BuiltIn),
        };

        let element_source = config.element_source();
        let (elements, elements_origin) = match load_element_table(&element_source) {
            Some(table) => (table, TableOrigin::File(element_source.path().to_path_buf())),
            None => (builtin_element_table(), TableOrigin::BuiltIn),
        };

        let triad_source = config.triad_source();
        let (triads, raw_triads) = load_triad_table(&triad_source);
        let triads_origin = if triads.is_some() {
            TableOrigin::File(triad_source.path().to_path_buf())
        } else {
            TableOrigin::Unavailable
        };

        Self {
            values,
            elements,
            triads,
            raw_triads,
            origins: TableOrigins {
                values: values_origin,
                elements: elements_origin,
                triads: triads_origin,
            },
        }
    }

    pub fn values(&self) -> &LetterValueTable {
        &self.values
    }

    pub fn elements(&self) -> &ElementTable {
        &self.elements
    }

    /// The triad table, or `None` when triad analysis is disabled.
    pub fn triads(&self) -> Option<&TriadTable> {
        self.triads.as_ref()
    }

    /// The triad table as loaded, for display.
    pub fn raw_triads(&self) -> Option<&RawTable> {
        self.raw_triads.as_ref()
    }

    pub fn origins(&self) -> &TableOrigins {
        &self.origins
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}
