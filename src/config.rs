//! Configuration for locating the reference tables.
//!
//! # Example
//!
//! ```
//! use abjad::config::AbjadConfig;
//!
//! let config = AbjadConfig::default().with_data_dir("/opt/abjad/data");
//! assert_eq!(
//!     config.value_source().path(),
//!     std::path::Path::new("/opt/abjad/data/abjad_values.csv")
//! );
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AbjadError, Result};
use crate::tables::raw::TableSource;

/// Default directory holding the reference tables.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default value table file name.
pub const DEFAULT_VALUE_TABLE: &str = "abjad_values.csv";

/// Default element table file name.
pub const DEFAULT_ELEMENT_TABLE: &str = "elements.csv";

/// Default triad table file name.
pub const DEFAULT_TRIAD_TABLE: &str = "triads.csv";

/// Where the three reference tables live and how they are delimited.
///
/// Table paths are resolved against `data_dir` unless they are absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbjadConfig {
    pub data_dir: PathBuf,
    pub value_table: PathBuf,
    pub element_table: PathBuf,
    pub triad_table: PathBuf,
    pub delimiter: char,
}

impl Default for AbjadConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            value_table: PathBuf::from(DEFAULT_VALUE_TABLE),
            element_table: PathBuf::from(DEFAULT_ELEMENT_TABLE),
            triad_table: PathBuf::from(DEFAULT_TRIAD_TABLE),
            delimiter: ',',
        }
    }
}

impl AbjadConfig {
    /// Load a JSON configuration file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AbjadConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() || self.delimiter.is_ascii_alphanumeric() {
            return Err(AbjadError::config(format!(
                "delimiter must be an ASCII punctuation or whitespace character, got {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_value_table<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.value_table = path.into();
        self
    }

    pub fn with_element_table<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.element_table = path.into();
        self
    }

    pub fn with_triad_table<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.triad_table = path.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    fn source(&self, path: &Path) -> TableSource {
        // validate() rejects non-ASCII delimiters; fall back to comma if it was skipped
        let delimiter = if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b','
        };
        TableSource::new(self.resolve(path)).with_delimiter(delimiter)
    }

    pub fn value_source(&self) -> TableSource {
        self.source(&self.value_table)
    }

    pub fn element_source(&self) -> TableSource {
        self.source(&self.element_table)
    }

    pub fn triad_source(&self) -> TableSource {
        self.source(&self.triad_table)
    }
}
