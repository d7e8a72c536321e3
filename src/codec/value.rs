use crate::codec::base64url::base64url_encode;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A value handed back by the platform credential API
///
/// Ceremony results are object graphs in which byte buffers can sit at any
/// depth. `PlatformValue` is the closed set of shapes such a graph is built
/// from. Anything that is neither a buffer nor a container is a `Leaf` and
/// passes through encoding untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformValue {
    /// A raw buffer or a byte view over one
    Bytes(Vec<u8>),
    /// An ordered sequence
    Array(Vec<PlatformValue>),
    /// An object's own entries
    ///
    /// Keys are kept sorted, so encoded objects list their members in key
    /// order rather than the order the platform produced them in.
    Object(BTreeMap<String, PlatformValue>),
    /// Strings, numbers, booleans and null
    Leaf(Value),
}

impl PlatformValue {
    /// Build an object from `(key, value)` pairs
    ///
    /// # Example
    /// ```rust
    /// use webauthn_json::PlatformValue;
    ///
    /// let value = PlatformValue::object([
    ///     ("rawId", PlatformValue::Bytes(vec![1, 2, 3])),
    ///     ("type", PlatformValue::from("public-key")),
    /// ]);
    /// assert!(matches!(value, PlatformValue::Object(_)));
    /// ```
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, PlatformValue)>,
    {
        PlatformValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

impl From<Vec<u8>> for PlatformValue {
    fn from(bytes: Vec<u8>) -> Self {
        PlatformValue::Bytes(bytes)
    }
}

impl From<Vec<PlatformValue>> for PlatformValue {
    fn from(items: Vec<PlatformValue>) -> Self {
        PlatformValue::Array(items)
    }
}

impl From<&str> for PlatformValue {
    fn from(text: &str) -> Self {
        PlatformValue::Leaf(Value::String(text.to_string()))
    }
}

impl From<String> for PlatformValue {
    fn from(text: String) -> Self {
        PlatformValue::Leaf(Value::String(text))
    }
}

impl From<bool> for PlatformValue {
    fn from(flag: bool) -> Self {
        PlatformValue::Leaf(Value::Bool(flag))
    }
}

impl From<i64> for PlatformValue {
    fn from(number: i64) -> Self {
        PlatformValue::Leaf(Value::from(number))
    }
}

/// Lift plain JSON into the variant set. Strings stay strings; nothing
/// becomes `Bytes`.
impl From<Value> for PlatformValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                PlatformValue::Array(items.into_iter().map(PlatformValue::from).collect())
            }
            Value::Object(entries) => PlatformValue::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, PlatformValue::from(value)))
                    .collect(),
            ),
            leaf => PlatformValue::Leaf(leaf),
        }
    }
}

/// Replace every byte buffer in a value with its Base64URL text, at any depth
///
/// Arrays keep their order and length and objects keep their keys. Leaves
/// are returned as they are.
///
/// # Example
/// ```rust
/// use webauthn_json::{encode_value, PlatformValue};
/// use serde_json::json;
///
/// let value = PlatformValue::object([
///     ("a", PlatformValue::Bytes(vec![1, 2, 3])),
///     ("e", PlatformValue::from(42i64)),
/// ]);
/// assert_eq!(encode_value(value), json!({"a": "AQID", "e": 42}));
/// ```
pub fn encode_value(value: PlatformValue) -> Value {
    match value {
        PlatformValue::Array(items) => Value::Array(items.into_iter().map(encode_value).collect()),
        PlatformValue::Bytes(bytes) => {
            tracing::trace!(len = bytes.len(), "encoding buffer");
            Value::String(base64url_encode(&bytes))
        }
        PlatformValue::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, encode_value(value)))
                .collect::<Map<String, Value>>(),
        ),
        PlatformValue::Leaf(leaf) => leaf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::base64url::base64url_decode;
    use serde_json::json;

    #[test]
    fn test_encode_nested_buffers() {
        let value = PlatformValue::object([
            ("a", PlatformValue::Bytes(vec![1, 2, 3])),
            (
                "b",
                PlatformValue::Array(vec![
                    PlatformValue::Bytes(vec![4]),
                    PlatformValue::object([("c", PlatformValue::Bytes(vec![5]))]),
                ]),
            ),
            ("d", PlatformValue::from("text")),
            ("e", PlatformValue::from(42i64)),
        ]);

        let encoded = encode_value(value);

        let a = encoded["a"].as_str().unwrap();
        let b0 = encoded["b"][0].as_str().unwrap();
        let c = encoded["b"][1]["c"].as_str().unwrap();
        assert_eq!(base64url_decode(a).unwrap(), vec![1, 2, 3]);
        assert_eq!(base64url_decode(b0).unwrap(), vec![4]);
        assert_eq!(base64url_decode(c).unwrap(), vec![5]);
        assert_eq!(encoded["d"], json!("text"));
        assert_eq!(encoded["e"], json!(42));
    }

    #[test]
    fn test_encode_preserves_array_order_and_length() {
        let value = PlatformValue::Array(vec![
            PlatformValue::Bytes(vec![0xff]),
            PlatformValue::Leaf(Value::Null),
            PlatformValue::from(true),
            PlatformValue::Array(vec![]),
        ]);

        assert_eq!(encode_value(value), json!(["_w", null, true, []]));
    }

    #[test]
    fn test_encode_leaves_unchanged() {
        for leaf in [json!(null), json!(false), json!(3.5), json!("YQ")] {
            assert_eq!(encode_value(PlatformValue::Leaf(leaf.clone())), leaf);
        }
    }

    #[test]
    fn test_object_keys_come_out_sorted() {
        let value = PlatformValue::object([
            ("rawId", PlatformValue::Bytes(vec![1])),
            ("id", PlatformValue::from("AQ")),
            ("clientExtensionResults", PlatformValue::object::<&str, _>([])),
        ]);

        let Value::Object(entries) = encode_value(value) else {
            panic!("expected an object");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["clientExtensionResults", "id", "rawId"]);
    }

    #[test]
    fn test_empty_buffer_encodes_to_empty_string() {
        assert_eq!(encode_value(PlatformValue::Bytes(vec![])), json!(""));
    }

    #[test]
    fn test_from_json_round_trips_through_encoder() {
        let json = json!({
            "id": "abc",
            "nested": {"list": [1, "two", null], "flag": true},
        });

        assert_eq!(encode_value(PlatformValue::from(json.clone())), json);
    }
}
