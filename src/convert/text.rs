//! Textual decoding and parsing for byte-buffer columns

use crate::error::{Error, Result};
use crate::types::{FieldKind, Value};

/// Decode a byte buffer as text. Invalid UTF-8 is replaced rather than
/// rejected, matching the permissive byte-to-string cast of typical drivers.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

fn parse_error(s: &str, target: &FieldKind) -> Error {
    Error::Conversion(format!("cannot parse '{}' as {}", s, target))
}

/// Parse decoded column text as the declared scalar kind
pub fn parse(s: &str, target: &FieldKind) -> Result<Value> {
    match target {
        FieldKind::I8 => s
            .parse::<i8>()
            .map(Value::I8)
            .map_err(|_| parse_error(s, target)),
        FieldKind::I16 => s
            .parse::<i16>()
            .map(Value::I16)
            .map_err(|_| parse_error(s, target)),
        FieldKind::I32 => s
            .parse::<i32>()
            .map(Value::I32)
            .map_err(|_| parse_error(s, target)),
        FieldKind::I64 => s
            .parse::<i64>()
            .map(Value::I64)
            .map_err(|_| parse_error(s, target)),
        FieldKind::U8 => s
            .parse::<u8>()
            .map(Value::U8)
            .map_err(|_| parse_error(s, target)),
        FieldKind::U16 => s
            .parse::<u16>()
            .map(Value::U16)
            .map_err(|_| parse_error(s, target)),
        FieldKind::U32 => s
            .parse::<u32>()
            .map(Value::U32)
            .map_err(|_| parse_error(s, target)),
        FieldKind::U64 => s
            .parse::<u64>()
            .map(Value::U64)
            .map_err(|_| parse_error(s, target)),
        FieldKind::F32 => s
            .parse::<f32>()
            .map(Value::F32)
            .map_err(|_| parse_error(s, target)),
        FieldKind::F64 => s
            .parse::<f64>()
            .map(Value::F64)
            .map_err(|_| parse_error(s, target)),
        FieldKind::Bool => parse_bool(s),
        _ => Err(Error::UnsupportedConversion {
            expected: target.to_string(),
            found: "bytes".into(),
        }),
    }
}

fn parse_bool(s: &str) -> Result<Value> {
    match s.to_uppercase().as_str() {
        "TRUE" | "T" | "YES" | "Y" | "1" => Ok(Value::Bool(true)),
        "FALSE" | "F" | "NO" | "N" | "0" => Ok(Value::Bool(false)),
        _ => Err(parse_error(s, &FieldKind::Bool)),
    }
}
