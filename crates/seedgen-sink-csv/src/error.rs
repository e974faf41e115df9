//! Error types for the CSV sink.

use thiserror::Error;

/// Errors that can occur while writing a CSV file.
#[derive(Error, Debug)]
pub enum CsvSinkError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record's field set does not match the header columns.
    #[error("record {index} does not match the header columns (expected {expected:?}, found {found:?})")]
    SchemaMismatch {
        /// Index of the offending record within the batch
        index: usize,
        /// Column names taken from the first record
        expected: Vec<String>,
        /// Field names found on the offending record
        found: Vec<String>,
    },
}
