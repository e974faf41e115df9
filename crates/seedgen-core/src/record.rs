//! Fully materialized generated records.

use crate::value::FieldValue;

/// One generated record: an ordered mapping from field name to value.
///
/// Field order matches the schema the record was generated from, so sinks
/// can preserve key order in JSON output and derive CSV column order
/// without consulting the schema. Lookups are linear, which is fine for
/// the handful of fields a record schema carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Row index assigned by the generator (0-based)
    index: u64,
    /// Field values in schema order
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Create a new record from pre-ordered fields.
    pub fn new(index: u64, fields: Vec<(String, FieldValue)>) -> Self {
        Self { index, fields }
    }

    /// The 0-based row index assigned at generation time.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            3,
            vec![
                ("name".to_string(), FieldValue::from("Ada Lovelace")),
                ("office".to_string(), FieldValue::from("HQ")),
            ],
        )
    }

    #[test]
    fn test_get() {
        let record = sample();
        assert_eq!(record.get("office"), Some(&FieldValue::from("HQ")));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_field_order_is_preserved() {
        let record = sample();
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["name", "office"]);
    }

    #[test]
    fn test_index_and_len() {
        let record = sample();
        assert_eq!(record.index(), 3);
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
    }
}
