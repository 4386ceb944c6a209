//! Error types for the data-loader crate.
//!
//! Every variant here is a startup failure: the explorer refuses to run
//! with a partially loaded dataset.

use thiserror::Error;

/// Errors that can occur while loading and normalizing the input tables
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the file (bad quoting, ragged rows, ...)
    #[error("CSV error in {file}: {source}")]
    CsvError {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A column required by the internal schema is not in the header
    #[error("Missing column {column} in {file}")]
    MissingColumn { file: String, column: String },

    /// A row in a data file couldn't be parsed
    ///
    /// `line` is the 1-based line number in the file, header included
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// The embedding file is not valid UTF-8
    #[error("{file} is not valid UTF-8")]
    InvalidEncoding { file: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
