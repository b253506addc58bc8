//! Field-checking primitives shared by the blueprints.
//!
//! "Falsy" follows JSON-document conventions: a missing key, `null`,
//! `false`, `0` and `""` all count as absent.

use serde_json::{Map, Value};

use crate::domain::error::FormatError;

pub(crate) type Object = Map<String, Value>;

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| is_truthy(v))
}

/// The input must be a JSON object.
pub(crate) fn require_object<'a>(
    input: &'a Value,
    entity: &'static str,
) -> Result<&'a Object, FormatError> {
    input
        .as_object()
        .ok_or(FormatError::NotAnObject { entity })
}

/// `key` must hold a non-empty string.
pub(crate) fn require_text(object: &Object, key: &'static str) -> Result<String, FormatError> {
    match object.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(FormatError::InvalidField { field: key }),
    }
}

/// `key` must hold an array; absence is an error.
pub(crate) fn require_sequence<'a>(
    object: &'a Object,
    key: &'static str,
) -> Result<&'a [Value], FormatError> {
    match object.get(key) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(FormatError::NotASequence { field: key }),
    }
}

/// `key` may be absent (or falsy), which reads as an empty array; any other
/// non-array value is an error.
pub(crate) fn sequence_or_default<'a>(
    object: &'a Object,
    key: &'static str,
) -> Result<&'a [Value], FormatError> {
    match truthy(object, key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(FormatError::NotASequence { field: key }),
    }
}

/// Clone `key` when truthy, otherwise an empty object.
pub(crate) fn object_or_default(object: &Object, key: &str) -> Value {
    truthy(object, key)
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}
