//! Time-tagged field decoding

use crate::error::{Error, Result};
use crate::types::{FieldKind, Value};
use chrono::{Local, NaiveDateTime};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a local `YYYY-MM-DD HH:MM:SS` column into Unix milliseconds.
///
/// Milliseconds are truncated toward zero, never rounded; the wire format
/// carries whole seconds, so the sub-second remainder is always zero.
pub fn decode(raw: Value, kind: &FieldKind, field: &str) -> Result<Value> {
    if *kind != FieldKind::I64 {
        return Err(Error::IllegalFieldType {
            field: field.into(),
            kind: kind.to_string(),
            tag: "time".into(),
        });
    }

    let s = match raw {
        Value::Bytes(b) => super::decode_text(b),
        Value::Str(s) => s,
        other => {
            return Err(Error::UnsupportedConversion {
                expected: "datetime text".into(),
                found: other.type_name().into(),
            });
        }
    };

    let naive = NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
        .map_err(|e| Error::Conversion(format!("invalid datetime '{}' in field {}: {}", s, field, e)))?;
    let local = naive.and_local_timezone(Local).earliest().ok_or_else(|| {
        Error::Conversion(format!("datetime '{}' does not exist in the local timezone", s))
    })?;
    Ok(Value::I64(local.timestamp_millis()))
}
