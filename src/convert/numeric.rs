//! Numeric conversions by value with bounds checks

use crate::error::{Error, Result};
use crate::types::{FieldKind, Value};
use std::fmt::Display;

fn out_of_range(value: impl Display, target: &FieldKind) -> Error {
    Error::Conversion(format!("value {} out of range for {}", value, target))
}

/// Convert an integer to any declared integer kind (widening or narrowing
/// with bounds check)
pub fn integer_to_integer(value: i128, target: &FieldKind) -> Result<Value> {
    match target {
        FieldKind::I8 => i8::try_from(value)
            .map(Value::I8)
            .map_err(|_| out_of_range(value, target)),
        FieldKind::I16 => i16::try_from(value)
            .map(Value::I16)
            .map_err(|_| out_of_range(value, target)),
        FieldKind::I32 => i32::try_from(value)
            .map(Value::I32)
            .map_err(|_| out_of_range(value, target)),
        FieldKind::I64 => i64::try_from(value)
            .map(Value::I64)
            .map_err(|_| out_of_range(value, target)),
        FieldKind::U8 => u8::try_from(value)
            .map(Value::U8)
            .map_err(|_| out_of_range(value, target)),
        FieldKind::U16 => u16::try_from(value)
            .map(Value::U16)
            .map_err(|_| out_of_range(value, target)),
        FieldKind::U32 => u32::try_from(value)
            .map(Value::U32)
            .map_err(|_| out_of_range(value, target)),
        FieldKind::U64 => u64::try_from(value)
            .map(Value::U64)
            .map_err(|_| out_of_range(value, target)),
        _ => Err(Error::UnsupportedConversion {
            expected: target.to_string(),
            found: "integer".into(),
        }),
    }
}

/// Convert an integer to a float kind (may lose precision but allowed)
pub fn integer_to_float(value: i128, target: &FieldKind) -> Result<Value> {
    match target {
        FieldKind::F32 => Ok(Value::F32(value as f32)),
        FieldKind::F64 => Ok(Value::F64(value as f64)),
        _ => Err(Error::UnsupportedConversion {
            expected: target.to_string(),
            found: "integer".into(),
        }),
    }
}

/// Convert a float to any declared numeric kind (integer targets truncate,
/// with range check)
pub fn float_to(value: f64, target: &FieldKind) -> Result<Value> {
    let truncated = value.trunc();
    match target {
        FieldKind::F32 => Ok(Value::F32(value as f32)),
        FieldKind::F64 => Ok(Value::F64(value)),
        FieldKind::I8 if in_range(truncated, i8::MIN as f64, i8::MAX as f64) => {
            Ok(Value::I8(truncated as i8))
        }
        FieldKind::I16 if in_range(truncated, i16::MIN as f64, i16::MAX as f64) => {
            Ok(Value::I16(truncated as i16))
        }
        FieldKind::I32 if in_range(truncated, i32::MIN as f64, i32::MAX as f64) => {
            Ok(Value::I32(truncated as i32))
        }
        FieldKind::I64 if in_range(truncated, i64::MIN as f64, i64::MAX as f64) => {
            Ok(Value::I64(truncated as i64))
        }
        FieldKind::U8 if in_range(truncated, 0.0, u8::MAX as f64) => {
            Ok(Value::U8(truncated as u8))
        }
        FieldKind::U16 if in_range(truncated, 0.0, u16::MAX as f64) => {
            Ok(Value::U16(truncated as u16))
        }
        FieldKind::U32 if in_range(truncated, 0.0, u32::MAX as f64) => {
            Ok(Value::U32(truncated as u32))
        }
        FieldKind::U64 if in_range(truncated, 0.0, u64::MAX as f64) => {
            Ok(Value::U64(truncated as u64))
        }
        kind if kind.is_integer() => Err(out_of_range(value, target)),
        _ => Err(Error::UnsupportedConversion {
            expected: target.to_string(),
            found: "float".into(),
        }),
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_and_narrow() {
        assert_eq!(
            integer_to_integer(1, &FieldKind::U64).unwrap(),
            Value::U64(1)
        );
        assert_eq!(
            integer_to_integer(-1, &FieldKind::I8).unwrap(),
            Value::I8(-1)
        );
        assert!(integer_to_integer(-1, &FieldKind::U64).is_err());
        assert!(integer_to_integer(i128::from(i64::MAX), &FieldKind::I32).is_err());
    }

    #[test]
    fn test_float_truncates_toward_zero() {
        assert_eq!(float_to(1.9, &FieldKind::I64).unwrap(), Value::I64(1));
        assert_eq!(float_to(-1.9, &FieldKind::I64).unwrap(), Value::I64(-1));
        assert!(float_to(f64::NAN, &FieldKind::I64).is_err());
        assert!(float_to(-1.5, &FieldKind::U8).is_err());
    }
}
