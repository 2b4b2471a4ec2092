//! Schemaless document shape returned by the remote store.

use serde_json::{Map, Value};

/// A single remote record: store-assigned identifier plus an arbitrary
/// field mapping. Typed records are derived from this at the repo boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Build a document from any JSON value; non-object values yield an
    /// empty field mapping.
    pub fn from_value(id: impl Into<String>, value: Value) -> Self {
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(id, fields)
    }

    /// String field, if present and actually a string.
    pub fn str_field(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    /// Numeric field as f64, if present and numeric.
    pub fn f64_field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(Value::as_f64)
    }

    /// Epoch-seconds timestamp field.
    ///
    /// The store serializes timestamps either as a bare number of seconds or
    /// as an object carrying a `seconds` component; both shapes are accepted.
    pub fn epoch_seconds_field(&self, name: &str) -> Option<i64> {
        match self.fields.get(name)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::Object(map) => map.get("seconds").and_then(Value::as_i64),
            _ => None,
        }
    }
}
