use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the star-history pipeline.
#[derive(Error, Debug)]
pub enum StarsError {
    /// The input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row index past the end of the loaded lines was requested.
    #[error("Row index {index} out of range ({len} rows loaded)")]
    RowIndexOutOfRange { index: usize, len: usize },

    /// The date row and the star row do not have the same number of cells.
    #[error("Row length mismatch: {dates} dates but {stars} star counts")]
    LengthMismatch { dates: usize, stars: usize },

    /// A date cell is not a valid `M/D/YYYY` calendar date.
    #[error("Invalid date {value:?}: {reason}")]
    DateFormat { value: String, reason: String },

    /// A star cell is not a non-negative integer.
    #[error("Invalid star count {value:?}")]
    NumericFormat { value: String },

    /// A weekday was requested for a pair that carries no date.
    #[error("Pair at position {position} has no date")]
    MissingDate { position: usize },

    /// A report could not be serialised to JSON.
    #[error("Failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StarsError {
    pub(crate) fn date_format(value: &str, reason: impl Into<String>) -> Self {
        StarsError::DateFormat {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the star crates.
pub type Result<T> = std::result::Result<T, StarsError>;
