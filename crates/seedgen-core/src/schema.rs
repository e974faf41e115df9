//! Record schema definitions.
//!
//! A [`RecordSchema`] is an ordered list of [`FieldSpec`]s, each naming a
//! field and the [`GeneratorSpec`] that produces its value. Schemas are
//! usually loaded from a YAML file:
//!
//! ```yaml
//! seed: 42
//! fields:
//!   - name: name
//!     generator:
//!       type: full_name
//!   - name: jobTitle
//!     generator:
//!       type: categorical
//!       values: ["66f83b238c25bfe77dfcfb5d"]
//!   - name: joiningDate
//!     generator:
//!       type: date_offset
//!       min_days: 0
//!       max_days: 365
//! ```

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Error type for schema configuration.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading the schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Two fields share a name
    #[error("Duplicate field name: {0}")]
    DuplicateFieldName(String),

    /// A categorical field has no candidates to pick from
    #[error("Field '{0}' has an empty candidate set")]
    EmptyCandidateSet(String),

    /// Date bounds are reversed
    #[error("Field '{field}' has an invalid date range: {detail}")]
    InvalidDateRange { field: String, detail: String },
}

/// Configuration for a single field generator.
///
/// Serialized with an explicit `type` tag so schemas stay readable:
///
/// ```yaml
/// generator:
///   type: categorical
///   values: ["a", "b"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorSpec {
    /// Uniform pick from a fixed, non-empty candidate set
    Categorical { values: Vec<String> },

    /// Today plus a random day offset in `[min_days, max_days]`, inclusive
    DateOffset { min_days: i64, max_days: i64 },

    /// Random date in the inclusive window `[start, end]`
    DateRange { start: NaiveDate, end: NaiveDate },

    /// Full display name from the injected person source
    FullName,

    /// Email address from the injected person source
    Email,

    /// Phone number from the injected person source
    Phone,

    /// Pattern string with `{index}`, `{uuid}` and `{rand:N}` placeholders
    Pattern { pattern: String },

    /// Random UUID v4 drawn from the seeded RNG, rendered as text
    UuidV4,

    /// Fixed string value
    Static { value: String },
}

/// Definition of one named, generated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique within the schema
    pub name: String,

    /// Generator producing the field's value
    pub generator: GeneratorSpec,
}

impl FieldSpec {
    /// Create a new field spec.
    pub fn new(name: impl Into<String>, generator: GeneratorSpec) -> Self {
        Self {
            name: name.into(),
            generator,
        }
    }
}

/// Ordered record schema: the set and order of keys in each output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Default random seed for deterministic generation
    #[serde(default)]
    pub seed: Option<u64>,

    /// Field definitions, in output order
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    /// Create a schema from field specs.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { seed: None, fields }
    }

    /// Parse and validate a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load and validate a schema from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Get a field spec by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in output order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Check schema invariants: unique field names, non-empty candidate
    /// sets, ordered date bounds.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName(field.name.clone()));
            }

            match &field.generator {
                GeneratorSpec::Categorical { values } if values.is_empty() => {
                    return Err(SchemaError::EmptyCandidateSet(field.name.clone()));
                }
                GeneratorSpec::DateOffset { min_days, max_days } => {
                    if min_days > max_days {
                        return Err(SchemaError::InvalidDateRange {
                            field: field.name.clone(),
                            detail: format!("min_days {min_days} > max_days {max_days}"),
                        });
                    }

                    let today = Utc::now().date_naive();
                    for days in [*min_days, *max_days] {
                        if Duration::try_days(days)
                            .and_then(|d| today.checked_add_signed(d))
                            .is_none()
                        {
                            return Err(SchemaError::InvalidDateRange {
                                field: field.name.clone(),
                                detail: format!(
                                    "offset of {days} days does not land on a representable date"
                                ),
                            });
                        }
                    }
                }
                GeneratorSpec::DateRange { start, end } if start > end => {
                    return Err(SchemaError::InvalidDateRange {
                        field: field.name.clone(),
                        detail: format!("start {start} > end {end}"),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPLOYEE_YAML: &str = r#"
seed: 42
fields:
  - name: name
    generator:
      type: full_name
  - name: email
    generator:
      type: email
  - name: jobTitle
    generator:
      type: categorical
      values: ["66f83b238c25bfe77dfcfb5d"]
  - name: joiningDate
    generator:
      type: date_offset
      min_days: 0
      max_days: 365
  - name: phoneNumber
    generator:
      type: phone
"#;

    #[test]
    fn test_parse_employee_schema() {
        let schema = RecordSchema::from_yaml(EMPLOYEE_YAML).unwrap();

        assert_eq!(schema.seed, Some(42));
        assert_eq!(
            schema.field_names(),
            vec!["name", "email", "jobTitle", "joiningDate", "phoneNumber"]
        );
        assert_eq!(
            schema.get_field("jobTitle").unwrap().generator,
            GeneratorSpec::Categorical {
                values: vec!["66f83b238c25bfe77dfcfb5d".to_string()],
            }
        );
    }

    #[test]
    fn test_seed_is_optional() {
        let schema = RecordSchema::from_yaml(
            r#"
fields:
  - name: office
    generator:
      type: static
      value: "Organisation Main Office"
"#,
        )
        .unwrap();

        assert_eq!(schema.seed, None);
        assert_eq!(
            schema.get_field("office").unwrap().generator,
            GeneratorSpec::Static {
                value: "Organisation Main Office".to_string(),
            }
        );
    }

    #[test]
    fn test_date_range_parses_iso_dates() {
        let schema = RecordSchema::from_yaml(
            r#"
fields:
  - name: joiningDate
    generator:
      type: date_range
      start: 2020-01-01
      end: 2024-12-31
"#,
        )
        .unwrap();

        let expected = GeneratorSpec::DateRange {
            start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        };
        assert_eq!(schema.fields[0].generator, expected);
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let result = RecordSchema::from_yaml(
            r#"
fields:
  - name: office
    generator:
      type: static
      value: "A"
  - name: office
    generator:
      type: static
      value: "B"
"#,
        );

        assert!(matches!(result, Err(SchemaError::DuplicateFieldName(name)) if name == "office"));
    }

    #[test]
    fn test_empty_candidate_set_rejected() {
        let result = RecordSchema::from_yaml(
            r#"
fields:
  - name: department
    generator:
      type: categorical
      values: []
"#,
        );

        assert!(matches!(result, Err(SchemaError::EmptyCandidateSet(name)) if name == "department"));
    }

    #[test]
    fn test_reversed_date_offset_rejected() {
        let result = RecordSchema::from_yaml(
            r#"
fields:
  - name: joiningDate
    generator:
      type: date_offset
      min_days: 10
      max_days: 0
"#,
        );

        assert!(matches!(result, Err(SchemaError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_unrepresentable_date_offset_rejected() {
        let result = RecordSchema::from_yaml(
            r#"
fields:
  - name: joiningDate
    generator:
      type: date_offset
      min_days: 1000000000
      max_days: 1000000001
"#,
        );

        assert!(matches!(result, Err(SchemaError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_reversed_date_range_rejected() {
        let result = RecordSchema::from_yaml(
            r#"
fields:
  - name: joiningDate
    generator:
      type: date_range
      start: 2024-12-31
      end: 2020-01-01
"#,
        );

        assert!(matches!(result, Err(SchemaError::InvalidDateRange { .. })));
    }
}
