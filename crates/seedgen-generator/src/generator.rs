//! Main record generator.

use crate::generators::generate_value;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seedgen_core::{FieldValue, PersonSource, Record, RecordSchema, SchemaError};

/// Record generator that produces deterministic fake records.
///
/// The generator uses a seeded random number generator to ensure
/// reproducible results across runs with the same seed and schema.
/// Duplicate values across records are permitted; no field carries a
/// uniqueness guarantee.
pub struct RecordGenerator {
    /// Schema defining the fields and their generators
    schema: RecordSchema,
    /// Base seed, kept for index jumps
    seed: u64,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Current record index (for incremental generation)
    index: u64,
    /// Injected source of person-like free text
    persons: Box<dyn PersonSource>,
}

impl RecordGenerator {
    /// Create a new record generator with the given schema, seed and
    /// person source.
    ///
    /// The schema is validated up front: empty categorical candidate
    /// sets, duplicate field names and reversed date bounds are rejected
    /// here rather than surfacing mid-generation.
    pub fn new(
        schema: RecordSchema,
        seed: u64,
        persons: Box<dyn PersonSource>,
    ) -> Result<Self, SchemaError> {
        schema.validate()?;
        Ok(Self {
            schema,
            seed,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
            persons,
        })
    }

    /// Set the starting index for record generation.
    ///
    /// Useful for incremental generation where a later batch must line up
    /// with an earlier run. The RNG is re-seeded from the base seed and
    /// the index, so the records produced for index N do not depend on
    /// how many records were generated before the jump.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self.rng = StdRng::seed_from_u64(self.rng_seed_for_index(index));
        self
    }

    /// Compute the RNG seed for a specific record index.
    fn rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Generate the next record, evaluating every field generator in
    /// schema order.
    pub fn next_record(&mut self) -> Record {
        let index = self.index;

        let fields: Vec<(String, FieldValue)> = self
            .schema
            .fields
            .iter()
            .map(|field| {
                let value = generate_value(
                    &field.generator,
                    &mut self.rng,
                    index,
                    self.persons.as_ref(),
                );
                (field.name.clone(), value)
            })
            .collect();

        self.index += 1;

        Record::new(index, fields)
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate `count` fully materialized records.
    pub fn generate(&mut self, count: u64) -> Vec<Record> {
        self.records(count).collect()
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
