//! The host scripting value model.

use std::collections::BTreeMap;

/// A value in the host scripting environment's model: tables keyed by
/// string, arrays, strings, byte strings, numbers, booleans.
///
/// Everything is owned; a `HostValue` never borrows from the session that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Nil,
    Bool(bool),
    Int(i64),
    Num(f64),
    Str(String),
    /// Raw bytes, e.g. an RGB pixel buffer. Distinct from `Str` because
    /// the payload need not be valid UTF-8.
    Bytes(Vec<u8>),
    Array(Vec<HostValue>),
    Table(BTreeMap<String, HostValue>),
}

impl HostValue {
    /// Build a table from key/value pairs.
    pub fn table<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, HostValue)>,
    {
        HostValue::Table(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Field lookup on a table; `None` for other variants.
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        match self {
            HostValue::Table(map) => map.get(key),
            _ => None,
        }
    }

    /// Convert to JSON. Byte strings become arrays of numbers; a
    /// non-finite `Num` becomes null.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            HostValue::Nil => Value::Null,
            HostValue::Bool(b) => Value::Bool(*b),
            HostValue::Int(n) => Value::from(*n),
            HostValue::Num(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            HostValue::Str(s) => Value::String(s.clone()),
            HostValue::Bytes(bytes) => {
                Value::Array(bytes.iter().map(|&b| Value::from(b)).collect())
            }
            HostValue::Array(items) => {
                Value::Array(items.iter().map(HostValue::to_json).collect())
            }
            HostValue::Table(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_get() {
        let value = HostValue::table([("width", HostValue::Int(800))]);
        assert_eq!(value.get("width"), Some(&HostValue::Int(800)));
        assert_eq!(value.get("height"), None);
        assert_eq!(HostValue::Int(1).get("width"), None);
    }

    #[test]
    fn test_to_json_shapes() {
        let value = HostValue::table([
            ("n", HostValue::Int(3)),
            ("s", HostValue::Str("hi".into())),
            ("b", HostValue::Bytes(vec![0, 255])),
            ("a", HostValue::Array(vec![HostValue::Bool(true)])),
        ]);
        let json = value.to_json();
        assert_eq!(json["n"], 3);
        assert_eq!(json["s"], "hi");
        assert_eq!(json["b"][1], 255);
        assert_eq!(json["a"][0], true);
    }

    #[test]
    fn test_to_json_non_finite_num() {
        assert_eq!(HostValue::Num(f64::NAN).to_json(), serde_json::Value::Null);
    }
}
