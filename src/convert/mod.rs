//! Field conversion rules
//!
//! Pure functions from (raw column value, declared field kind, conversion)
//! to a typed value or an error. The untagged path is a finite matrix over
//! (raw kind x declared kind); the byte-buffer parse fallback is kept as a
//! separate branch because it fails differently (parse errors rather than
//! type errors).

use crate::error::{Error, Result};
use crate::types::{Binding, Conversion, FieldKind, Value};

mod json;
mod numeric;
mod temporal;
mod text;

pub(crate) use text::decode_text;

/// Apply the conversion bound to a column.
///
/// The raw value is never `Null` here; the materializer skips null columns.
pub fn apply(raw: Value, binding: &Binding) -> Result<Value> {
    match binding.conversion {
        Conversion::Direct => convert(raw, &binding.kind),
        Conversion::Json => json::decode(raw, &binding.kind, binding.field),
        Conversion::Time => temporal::decode(raw, &binding.kind, binding.field),
    }
}

/// Untagged conversion matrix.
///
/// Also applied element-by-element to JSON-decoded sequences, which is why
/// list and map raw values show up here.
pub fn convert(value: Value, kind: &FieldKind) -> Result<Value> {
    // Exact kind match passes through unchanged.
    if value.matches(kind) {
        return Ok(value);
    }

    match (value, kind) {
        // Numeric raw values convert by value, not bit pattern. Every
        // integer variant fits i128, so one signed path covers them all.
        (value, kind) if value.is_integer() && kind.is_integer() => {
            numeric::integer_to_integer(value.to_i128()?, kind)
        }
        (value, kind) if value.is_integer() && kind.is_numeric() => {
            numeric::integer_to_float(value.to_i128()?, kind)
        }
        (Value::F32(v), kind) if kind.is_numeric() => numeric::float_to(v as f64, kind),
        (Value::F64(v), kind) if kind.is_numeric() => numeric::float_to(v, kind),

        // Byte buffers are how some drivers deliver text, binary, and
        // numeric-as-text columns. Text targets decode directly; scalar
        // targets decode then parse.
        (Value::Bytes(b), FieldKind::Str) => Ok(Value::Str(decode_text(b))),
        (Value::Bytes(b), kind) if kind.is_numeric() || *kind == FieldKind::Bool => {
            text::parse(&decode_text(b), kind)
        }

        // Nested values out of JSON decoding: convert elements recursively.
        (Value::List(items), FieldKind::List(elem)) => items
            .into_iter()
            .map(|item| convert(item, elem))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),

        (value, kind) => Err(Error::UnsupportedConversion {
            expected: kind.to_string(),
            found: value.type_name().into(),
        }),
    }
}
