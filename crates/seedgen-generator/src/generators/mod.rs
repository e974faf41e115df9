//! Individual value generators for the supported field kinds.
//!
//! This module provides the generation logic for each [`GeneratorSpec`]
//! variant. Free-text person fields are not generated here; they are
//! delegated to the injected [`PersonSource`].

pub mod categorical;
pub mod date;
pub mod pattern;
pub mod uuid;

use rand::rngs::StdRng;
use seedgen_core::{FieldValue, GeneratorSpec, PersonSource};

/// Generate a value based on the generator configuration.
///
/// Callers pass the current record index (for pattern placeholders) and
/// the injected person source. All randomness is drawn from `rng`, so a
/// seeded generator stays deterministic.
pub fn generate_value(
    spec: &GeneratorSpec,
    rng: &mut StdRng,
    index: u64,
    persons: &dyn PersonSource,
) -> FieldValue {
    match spec {
        GeneratorSpec::Categorical { values } => categorical::pick(values, rng),

        GeneratorSpec::DateOffset { min_days, max_days } => {
            date::generate_date_offset(rng, *min_days, *max_days)
        }

        GeneratorSpec::DateRange { start, end } => date::generate_date_range(rng, *start, *end),

        GeneratorSpec::FullName => FieldValue::Text(persons.full_name(rng)),

        GeneratorSpec::Email => FieldValue::Text(persons.email(rng)),

        GeneratorSpec::Phone => FieldValue::Text(persons.phone(rng)),

        GeneratorSpec::Pattern { pattern } => pattern::generate_pattern(pattern, rng, index),

        GeneratorSpec::UuidV4 => uuid::generate_uuid_v4(rng),

        GeneratorSpec::Static { value } => FieldValue::Text(value.clone()),
    }
}
