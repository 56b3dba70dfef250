//! JSON-tagged field decoding

use crate::error::{Error, Result};
use crate::types::{FieldKind, Value};
use std::collections::HashMap;

/// Decode a JSON text column into a map or list field.
///
/// A JSON literal `null` yields `Value::Null`, which the materializer treats
/// as "leave the field at its default", never an empty container.
pub fn decode(raw: Value, kind: &FieldKind, field: &str) -> Result<Value> {
    let parsed: serde_json::Value = match raw {
        Value::Bytes(b) => serde_json::from_slice(&b),
        Value::Str(s) => serde_json::from_str(&s),
        other => {
            return Err(Error::UnsupportedConversion {
                expected: "json text".into(),
                found: other.type_name().into(),
            });
        }
    }
    .map_err(|e| Error::Conversion(format!("invalid json in field {}: {}", field, e)))?;

    match kind {
        FieldKind::Map => match parsed {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Object(entries) => Ok(Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, from_json(value)))
                    .collect(),
            )),
            other => Err(Error::Conversion(format!(
                "field {} expects a json object, got {}",
                field, other
            ))),
        },
        FieldKind::List(elem) => match parsed {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| super::convert(from_json(item), elem))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            other => Err(Error::Conversion(format!(
                "field {} expects a json array, got {}",
                field, other
            ))),
        },
        other => Err(Error::IllegalFieldType {
            field: field.into(),
            kind: other.to_string(),
            tag: "json".into(),
        }),
    }
}

/// Map a decoded JSON value onto the column value model
fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::I64(i)
            } else if let Some(u) = n.as_u64() {
                Value::U64(u)
            } else {
                n.as_f64().map(Value::F64).unwrap_or(Value::Null)
            }
        }
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect::<HashMap<_, _>>(),
        ),
    }
}
