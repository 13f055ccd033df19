use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A parsed JSON value.
///
/// A closed sum type so that matches over all variants are checked
/// exhaustively. Integer and float values are kept distinct: `3` parses
/// as `Int(3)`, `3.0` as `Float(3.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<JsonValue>),
    /// Object mapping; duplicate keys resolve last-write-wins and
    /// insertion order is not preserved.
    Object(HashMap<String, JsonValue>),
}

impl JsonValue {
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }
}
