//! Core types for the seedgen synthetic record generator.
//!
//! This crate defines the shared vocabulary used across the seedgen
//! workspace:
//!
//! - [`RecordSchema`] / [`FieldSpec`] / [`GeneratorSpec`] - the shape of a
//!   generated record, loadable from a YAML schema file
//! - [`FieldValue`] / [`Record`] - a fully materialized generated record
//! - [`PersonSource`] - the injected capability that produces person-like
//!   free text (names, emails, phone numbers)
//! - [`RecordSink`] / [`WriteMetrics`] - the destination abstraction that
//!   serializes a record batch to a file
//!
//! The generator itself lives in `seedgen-generator`; file sinks live in
//! `seedgen-sink-json` and `seedgen-sink-csv`.

pub mod person;
pub mod record;
pub mod schema;
pub mod sink;
pub mod value;

// Re-exports for convenience
pub use person::PersonSource;
pub use record::Record;
pub use schema::{FieldSpec, GeneratorSpec, RecordSchema, SchemaError};
pub use sink::{RecordSink, WriteMetrics};
pub use value::FieldValue;
