/// Decoded listing payload and its top-level classification
use crate::constants::{WHIRLPOOLS_KEY, WHIRLPOOL_ADDRESS_KEY};
use crate::errors::{InspectorError, InspectorResult};
use serde_json::{Map, Value};

/// Top-level shape of the decoded body
///
/// Built once by [`Payload::classify`]; everything downstream matches on the
/// variant instead of probing the raw `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Key order is the order the keys arrived in
    Object(Map<String, Value>),
    Array(Vec<Value>),
    /// Scalar or null
    Other(Value),
}

impl Payload {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Object(map) => Payload::Object(map),
            Value::Array(items) => Payload::Array(items),
            other => Payload::Other(other),
        }
    }

    /// Decode a raw body; failures keep the body for the preview
    pub fn decode(body: &str) -> InspectorResult<Self> {
        serde_json::from_str::<Value>(body)
            .map(Payload::classify)
            .map_err(|e| InspectorError::parse(e, body))
    }

    /// Runtime type of the payload as a JSON type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Payload::Object(_) => "object",
            Payload::Array(_) => "array",
            Payload::Other(value) => value_type_name(value),
        }
    }

    /// The `whirlpools` array, only if the key exists and holds an array
    pub fn whirlpools(&self) -> Option<&Vec<Value>> {
        match self {
            Payload::Object(map) => map.get(WHIRLPOOLS_KEY).and_then(Value::as_array),
            _ => None,
        }
    }

    /// First entry of a non-empty `whirlpools` array
    pub fn first_whirlpool(&self) -> Option<&Value> {
        self.whirlpools().and_then(|pools| pools.first())
    }

    /// First element of a top-level array
    pub fn first_item(&self) -> Option<&Value> {
        match self {
            Payload::Array(items) => items.first(),
            _ => None,
        }
    }

    /// Whirlpool entry whose `address` equals `address`
    pub fn find_whirlpool(&self, address: &str) -> Option<&Value> {
        self.whirlpools()?.iter().find(|pool| {
            pool.get(WHIRLPOOL_ADDRESS_KEY).and_then(Value::as_str) == Some(address)
        })
    }
}

pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Plain string form of a value: strings unquoted, everything else as JSON
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Prefix of `text` holding at most `limit` characters
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_variants() {
        assert!(matches!(Payload::classify(json!({"a": 1})), Payload::Object(_)));
        assert!(matches!(Payload::classify(json!([1, 2])), Payload::Array(_)));
        assert_eq!(Payload::classify(json!(42)), Payload::Other(json!(42)));
        assert_eq!(Payload::classify(Value::Null).type_name(), "null");
    }

    #[test]
    fn test_decode_invalid_json_keeps_body() {
        match Payload::decode("not json") {
            Err(InspectorError::Parse { detail, raw_body }) => {
                assert!(!detail.is_empty());
                assert_eq!(raw_body, "not json");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_object_keys_keep_arrival_order() {
        let payload = Payload::decode(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        match payload {
            Payload::Object(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_first_whirlpool_checks_presence_and_type() {
        let full = Payload::classify(json!({"whirlpools": [{"address": "A"}, {"address": "B"}]}));
        assert_eq!(full.first_whirlpool(), Some(&json!({"address": "A"})));

        let empty = Payload::classify(json!({"whirlpools": []}));
        assert_eq!(empty.first_whirlpool(), None);

        let wrong_type = Payload::classify(json!({"whirlpools": {"address": "A"}}));
        assert_eq!(wrong_type.first_whirlpool(), None);

        let missing = Payload::classify(json!({"pools": [1]}));
        assert_eq!(missing.first_whirlpool(), None);

        let array = Payload::classify(json!([{"whirlpools": [1]}]));
        assert_eq!(array.first_whirlpool(), None);
    }

    #[test]
    fn test_find_whirlpool_by_address() {
        let payload = Payload::classify(json!({
            "whirlpools": [
                {"address": "A", "tickSpacing": 64},
                {"address": 7},
                {"address": "B", "tickSpacing": 4}
            ]
        }));
        assert_eq!(payload.find_whirlpool("B"), Some(&json!({"address": "B", "tickSpacing": 4})));
        assert_eq!(payload.find_whirlpool("C"), None);
    }

    #[test]
    fn test_display_string() {
        assert_eq!(display_string(&json!("plain")), "plain");
        assert_eq!(display_string(&json!(42)), "42");
        assert_eq!(display_string(&json!(true)), "true");
        assert_eq!(display_string(&Value::Null), "null");
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("ééé", 2), "éé");
        assert_eq!(truncate_chars("", 5), "");
    }
}
