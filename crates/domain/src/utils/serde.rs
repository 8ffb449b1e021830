//! Lenient field decoders for server payloads
//!
//! The deal-desk backend is not consistent about identifier types: the same
//! field arrives as `"42"` from one endpoint and `42` from another. These
//! helpers accept either and always hand back a `String`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a required identifier that may be a JSON string or number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

/// Decode an optional identifier that may be a JSON string, number or null.
///
/// Pair with `#[serde(default)]` so a missing field also yields `None`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "string_or_number")]
        required: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        optional: Option<String>,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let sample: Sample = serde_json::from_str(r#"{"required": 42, "optional": "A-7"}"#).unwrap();
        assert_eq!(sample.required, "42");
        assert_eq!(sample.optional.as_deref(), Some("A-7"));
    }

    #[test]
    fn missing_and_null_optional_are_none() {
        let missing: Sample = serde_json::from_str(r#"{"required": "x"}"#).unwrap();
        assert_eq!(missing.optional, None);

        let null: Sample = serde_json::from_str(r#"{"required": "x", "optional": null}"#).unwrap();
        assert_eq!(null.optional, None);
    }

    #[test]
    fn rejects_structured_values() {
        let result: Result<Sample, _> = serde_json::from_str(r#"{"required": [1]}"#);
        assert!(result.is_err());
    }
}
