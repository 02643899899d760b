//! JSON interop for the value graph.
//!
//! Serialization produces the natural shape a template renderer expects.
//! Conversion from `serde_json::Value` builds an untyped graph for callers
//! that have no declared schema.

use serde::ser::{Serialize, Serializer};

use super::{Mapping, Sequence, Value};
use crate::error::Result;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null | Value::Optional(None) => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Time(t) => serializer.serialize_str(&t.to_rfc3339()),
            Value::Record(record) => serializer.collect_map(record.fields()),
            Value::Mapping(mapping) => serializer.collect_map(mapping.iter()),
            Value::Sequence(sequence) => serializer.collect_seq(sequence.iter()),
            Value::Optional(Some(inner)) | Value::Dynamic(inner) => inner.serialize(serializer),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Str(n.to_string()),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                let items: Vec<Value> = items.into_iter().map(Value::from).collect();
                let prototype = items.first().map(Value::zeroed).unwrap_or_default();
                Value::Sequence(Sequence::from_items(prototype, items))
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .fold(Mapping::new(), |mapping, (k, v)| {
                        mapping.with_entry(k, Value::from(v))
                    }),
            ),
        }
    }
}

impl Value {
    /// Parse a JSON document into an untyped value graph.
    ///
    /// Objects become mappings, arrays become sequences whose prototype is
    /// shaped like their first element.
    ///
    /// # Example
    ///
    /// ```
    /// use formgraph_core::Value;
    ///
    /// let data = Value::from_json_str(r#"{"tags": ["a", "b"]}"#).unwrap();
    /// assert_eq!(data.as_mapping().map(|m| m.len()), Some(1));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Value> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(Value::from(parsed))
    }

    /// Convert to a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
