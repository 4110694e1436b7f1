//! Error types for vocab-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading the master word list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("word list not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported word list format: {0} (expected .csv or .tsv)")]
    UnsupportedFormat(PathBuf),

    #[error("word list is missing required columns: {0}")]
    MissingColumns(String),

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed word list: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors reading or writing the hard-word store.
///
/// A missing backing file is not an error (the store starts empty);
/// everything else is surfaced rather than papered over, so the
/// in-memory and on-disk state can never silently diverge.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access hard-word store: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed hard-word store: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid {column} value {value:?} in hard-word store row {row}")]
    InvalidField {
        column: &'static str,
        value: String,
        row: usize,
    },

    #[error("hard-word store is missing the {0} column")]
    MissingColumn(&'static str),
}
