//! Tabular (CSV) sink for seedgen records.
//!
//! Writes a record batch as a spreadsheet-compatible CSV table: one
//! header row of column names, one row per record. All records in a
//! batch must share the same field shape.
//!
//! # Example
//!
//! ```ignore
//! use seedgen_core::RecordSink;
//! use seedgen_sink_csv::CsvSink;
//!
//! let metrics = CsvSink::new().write(&records, Path::new("employees.csv"))?;
//! println!("wrote {} records", metrics.records_written);
//! ```

mod error;
mod sink;

pub use error::CsvSinkError;
pub use sink::{CsvSink, DEFAULT_BUFFER_SIZE};
