//! # Defensive Payload Decoding
//!
//! Provider context blobs arrive in one of several shapes: a structured
//! object, a JSON-encoded string, a string JSON-encoded twice, or a
//! malformed fragment. `decode` collapses the string cases into
//! structure where possible and otherwise preserves the input verbatim.
//!
//! Absence of structure is a representable outcome, not an error:
//! nothing in this module returns `Result`.

use serde_json::Value;

/// Decode a possibly-stringified JSON value.
///
/// - Non-string values pass through unchanged.
/// - Strings are JSON-parsed. On failure, embedded newlines are
///   stripped and the parse retried once (some providers emit raw
///   newlines inside string-encoded JSON). On second failure the
///   original string is returned verbatim.
///
/// Idempotent on structured input: `decode(decode(v))` is `decode(v)`.
pub fn decode(value: Value) -> Value {
    let s = match value {
        Value::String(s) => s,
        structured => return structured,
    };
    match serde_json::from_str::<Value>(&s) {
        Ok(parsed) => parsed,
        Err(_) => {
            let stripped: String = s.chars().filter(|c| *c != '\n').collect();
            match serde_json::from_str::<Value>(&stripped) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::debug!(error = %err, "context payload kept as raw string");
                    Value::String(s)
                }
            }
        }
    }
}

/// Render a value as a JSON string for the contract wire format.
///
/// String values pass verbatim (they are already the encoded form);
/// other values serialize. Serialization of an in-memory `Value` does
/// not fail in practice, but the fallback keeps this function total.
pub fn to_json_string(value: &Value) -> String {
    if let Value::String(s) = value {
        return s.clone();
    }
    serde_json::to_string(value).unwrap_or_else(|_| "[unserializable]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_object_passes_through() {
        let v = json!({"extractedParameters": {"count": 2}});
        assert_eq!(decode(v.clone()), v);
    }

    #[test]
    fn test_number_and_bool_pass_through() {
        assert_eq!(decode(json!(42)), json!(42));
        assert_eq!(decode(json!(true)), json!(true));
        assert_eq!(decode(Value::Null), Value::Null);
    }

    #[test]
    fn test_encoded_string_decodes() {
        let v = Value::String(r#"{"a":1}"#.into());
        assert_eq!(decode(v), json!({"a": 1}));
    }

    #[test]
    fn test_newline_corrupted_string_decodes_on_retry() {
        let v = Value::String("{\"a\":\n1}".into());
        assert_eq!(decode(v), json!({"a": 1}));
    }

    #[test]
    fn test_garbage_string_preserved_verbatim() {
        let v = Value::String("not json at all".into());
        assert_eq!(decode(v), Value::String("not json at all".into()));
    }

    #[test]
    fn test_double_encoded_needs_two_passes() {
        let inner = r#"{"a":1}"#;
        let outer = serde_json::to_string(inner).unwrap();
        let once = decode(Value::String(outer));
        // First pass yields the inner encoded string; second yields structure.
        assert_eq!(once, Value::String(inner.into()));
        assert_eq!(decode(once), json!({"a": 1}));
    }

    #[test]
    fn test_idempotent_on_structured() {
        let v = json!({"nested": {"deep": [1, 2, 3]}});
        assert_eq!(decode(decode(v.clone())), v);
    }

    #[test]
    fn test_to_json_string_passes_strings_verbatim() {
        assert_eq!(to_json_string(&Value::String("already encoded".into())), "already encoded");
    }

    #[test]
    fn test_to_json_string_serializes_structure() {
        assert_eq!(to_json_string(&json!({"a": 1})), r#"{"a":1}"#);
    }

    proptest! {
        // Pass-through invariant: decode(x) == x for all non-string values.
        #[test]
        fn prop_non_string_pass_through(n in any::<i64>(), b in any::<bool>()) {
            prop_assert_eq!(decode(json!(n)), json!(n));
            prop_assert_eq!(decode(json!(b)), json!(b));
            prop_assert_eq!(decode(json!([n, b])), json!([n, b]));
        }

        // Round-trip stability: a well-formed encoding decodes to the
        // same structure after re-encoding.
        #[test]
        fn prop_round_trip_stable(keys in proptest::collection::vec("[a-z]{1,8}", 0..5)) {
            let mut map = serde_json::Map::new();
            for (i, k) in keys.iter().enumerate() {
                map.insert(k.clone(), json!(i));
            }
            let original = Value::Object(map);
            let encoded = serde_json::to_string(&original).unwrap();
            let decoded = decode(Value::String(encoded));
            prop_assert_eq!(&decoded, &original);
            let re_encoded = serde_json::to_string(&decoded).unwrap();
            prop_assert_eq!(decode(Value::String(re_encoded)), original);
        }
    }
}
