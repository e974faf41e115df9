//! JSON array sink for seedgen records.
//!
//! Writes a record batch as a single pretty-printed JSON array of
//! objects, with object keys in schema order.
//!
//! # Example
//!
//! ```ignore
//! use seedgen_core::RecordSink;
//! use seedgen_sink_json::JsonSink;
//!
//! let metrics = JsonSink::new().write(&records, Path::new("dummy.json"))?;
//! println!("wrote {} records", metrics.records_written);
//! ```

mod error;
mod sink;

pub use error::JsonSinkError;
pub use sink::{JsonSink, DEFAULT_BUFFER_SIZE};
