//! Value representation for generated record fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single generated field value.
///
/// Only two value kinds exist: free text and calendar dates. Dates
/// serialize as `YYYY-MM-DD` strings, which is also the format written
/// to CSV cells.
///
/// The `Date` variant is listed first so that untagged deserialization
/// recovers date-shaped strings as dates on round-trip reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Calendar date without a time component
    Date(NaiveDate),

    /// Free text
    Text(String),
}

impl FieldValue {
    /// Render the value as the string written to a CSV cell.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Date(_) => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_serializes_as_iso_string() {
        let value = FieldValue::Date(NaiveDate::from_ymd_opt(2024, 9, 28).unwrap());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"2024-09-28\"");
    }

    #[test]
    fn test_text_serializes_as_plain_string() {
        let value = FieldValue::Text("hello".to_string());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"hello\"");
    }

    #[test]
    fn test_date_round_trip() {
        let value = FieldValue::Date(NaiveDate::from_ymd_opt(2024, 9, 28).unwrap());
        let json = serde_json::to_string(&value).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_to_text() {
        let date = FieldValue::Date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(date.to_text(), "2025-01-02");

        let text = FieldValue::Text("Org Main Office".to_string());
        assert_eq!(text.to_text(), "Org Main Office");
    }

    #[test]
    fn test_accessors() {
        let date = FieldValue::from(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert!(date.as_date().is_some());
        assert!(date.as_text().is_none());

        let text = FieldValue::from("x");
        assert_eq!(text.as_text(), Some("x"));
        assert!(text.as_date().is_none());
    }
}
