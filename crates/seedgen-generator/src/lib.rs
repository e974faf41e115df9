//! Record generator for the seedgen synthetic data toolkit.
//!
//! This crate provides the `RecordGenerator`, which produces deterministic
//! fake records from a [`RecordSchema`](seedgen_core::RecordSchema). The
//! generator uses a seeded RNG so the same schema and seed always produce
//! the same records.
//!
//! # Architecture
//!
//! ```text
//! RecordSchema (YAML)          PersonSource (injected)
//!        │                            │
//!        ▼                            │
//! ┌─────────────────┐                 │
//! │ RecordGenerator │◄────────────────┘
//! │                 │
//! │  - seed         │
//! │  - rng (StdRng) │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Record { index, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use seedgen_core::RecordSchema;
//! use seedgen_faker::Wordbook;
//! use seedgen_generator::RecordGenerator;
//!
//! # fn main() -> Result<(), seedgen_core::SchemaError> {
//! let schema = RecordSchema::from_yaml(r#"
//! fields:
//!   - name: email
//!     generator:
//!       type: pattern
//!       pattern: "user_{index}@example.com"
//!   - name: office
//!     generator:
//!       type: categorical
//!       values: ["66f7e88b2f1b6c01120dcc2b"]
//! "#)?;
//!
//! let mut generator = RecordGenerator::new(schema, 42, Box::new(Wordbook::new()))?;
//! let records = generator.generate(10);
//! assert_eq!(records.len(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! # Generators
//!
//! The following generator types are supported:
//!
//! - `categorical` - Uniform pick from a fixed candidate set
//! - `date_offset` - Today plus a random day offset in an inclusive range
//! - `date_range` - Random date in an inclusive calendar window
//! - `full_name` / `email` / `phone` - Delegated to the injected `PersonSource`
//! - `pattern` - Pattern strings with placeholders (`{index}`, `{uuid}`, `{rand:N}`)
//! - `uuid_v4` - Random UUID v4 drawn from the seeded RNG
//! - `static` - Fixed string value

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{RecordGenerator, RecordIterator};
