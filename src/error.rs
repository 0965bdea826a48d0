//! Error types for the abjad library.
//!
//! Analysis itself never fails: every input produces a defined (possibly empty)
//! result. Errors only surface from reading reference tables, configuration
//! files and exports. All of them are represented by [`AbjadError`].
//!
//! # Examples
//!
//! ```
//! use abjad::error::{AbjadError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AbjadError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for abjad operations.
#[derive(Error, Debug)]
pub enum AbjadError {
    /// I/O errors (missing table files, unwritable export targets, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading or writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reference table errors (unusable structure, no data rows)
    #[error("Table error: {0}")]
    Table(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AbjadError.
pub type Result<T> = std::result::Result<T, AbjadError>;

impl AbjadError {
    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        AbjadError::Table(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AbjadError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AbjadError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AbjadError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        AbjadError::Other(format!("Not found: {}", msg.into()))
    }
}
