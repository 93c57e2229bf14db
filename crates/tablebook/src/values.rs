//! Loading raw form values from JSON documents.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::booking::BookingField;
use crate::error::{BookingError, Result};

/// Parses a JSON object of field name → input into raw values.
///
/// Strings are taken verbatim and numbers become their decimal text, the
/// way a browser submits a number input. `null` leaves the field unset.
pub fn values_from_json(json: &str) -> Result<HashMap<String, String>> {
    let document: Value = serde_json::from_str(json)?;

    let Value::Object(entries) = document else {
        return Err(BookingError::InvalidValues {
            field: "(root)".to_string(),
            message: "expected a JSON object".to_string(),
        });
    };

    let mut values = HashMap::new();
    for (key, value) in entries {
        let field: BookingField = key.parse()?;
        let raw = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(BookingError::InvalidValues {
                    field: key,
                    message: format!("expected a string or number, got {other}"),
                })
            }
        };
        values.insert(field.name().to_string(), raw);
    }

    Ok(values)
}

/// Reads and parses a JSON values file.
pub fn load_values(path: &Path) -> Result<HashMap<String, String>> {
    let contents = fs::read_to_string(path)?;
    values_from_json(&contents)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_strings_and_numbers() {
        let values =
            values_from_json(r#"{"name": "Jane", "guests": 2, "specialRequest": null}"#).unwrap();
        assert_eq!(values.get("name").map(String::as_str), Some("Jane"));
        assert_eq!(values.get("guests").map(String::as_str), Some("2"));
        assert!(!values.contains_key("specialRequest"));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = values_from_json(r#"{"phone": "555"}"#).unwrap_err();
        assert!(matches!(err, BookingError::UnknownField(name) if name == "phone"));
    }

    #[test]
    fn test_rejects_non_object() {
        let err = values_from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, BookingError::InvalidValues { .. }));
    }

    #[test]
    fn test_rejects_nested_values() {
        let err = values_from_json(r#"{"guests": [4]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid values for field guests: expected a string or number, got [4]"
        );
    }

    #[test]
    fn test_load_values_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"email": "jane@example.com"}}"#).unwrap();
        let values = load_values(file.path()).unwrap();
        assert_eq!(
            values.get("email").map(String::as_str),
            Some("jane@example.com")
        );
    }

    #[test]
    fn test_load_values_missing_file() {
        let err = load_values(Path::new("/nonexistent/values.json")).unwrap_err();
        assert!(matches!(err, BookingError::Io(_)));
    }
}
