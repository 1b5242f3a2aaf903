//! Field-level serde adapters for store records.
//!
//! Records come from loosely typed stores (MySQL DECIMAL as strings,
//! TINYINT booleans, hand-edited documents). A value of the wrong type
//! degrades to "absent" for that one field instead of rejecting the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number or numeric string → `Some(f64)`; anything else → `None`.
pub fn f64_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_f64(&Value::deserialize(deserializer)?))
}

/// Integer or integer string → `Some(i64)`; anything else → `None`.
pub fn i64_or_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_i64(&Value::deserialize(deserializer)?))
}

/// String → `Some`; any other JSON type → `None`.
pub fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// `true`/`false`, `1`/`0` and their string forms; anything else is `false`.
pub fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1"),
        _ => false,
    })
}

pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

pub fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "f64_or_none")]
        pay: Option<f64>,
        #[serde(default, deserialize_with = "i64_or_none")]
        id: Option<i64>,
        #[serde(default, deserialize_with = "string_or_none")]
        city: Option<String>,
        #[serde(default, deserialize_with = "bool_or_false")]
        relocate: bool,
    }

    fn row(value: Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let r = row(json!({"pay": " 600.50 ", "id": "42"}));
        assert_eq!(r.pay, Some(600.5));
        assert_eq!(r.id, Some(42));
    }

    #[test]
    fn test_wrong_types_become_none() {
        let r = row(json!({"pay": "lots", "id": 1.5, "city": 5, "relocate": [true]}));
        assert_eq!(r.pay, None);
        assert_eq!(r.id, None);
        assert_eq!(r.city, None);
        assert!(!r.relocate);
    }

    #[test]
    fn test_nan_like_strings_are_rejected() {
        assert_eq!(row(json!({"pay": "NaN"})).pay, None);
        assert_eq!(row(json!({"pay": "inf"})).pay, None);
    }

    #[test]
    fn test_tinyint_booleans() {
        assert!(row(json!({"relocate": 1})).relocate);
        assert!(row(json!({"relocate": "true"})).relocate);
        assert!(!row(json!({"relocate": 0})).relocate);
        assert!(!row(json!({"relocate": "no"})).relocate);
    }

    #[test]
    fn test_null_and_missing_are_none() {
        let r = row(json!({"pay": null, "city": null}));
        assert_eq!(r.pay, None);
        assert_eq!(r.city, None);
        assert_eq!(row(json!({})).id, None);
    }
}
