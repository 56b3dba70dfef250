//! Column values shared by the driver contract and materialized rows

use crate::error::{Error, Result};
use crate::types::FieldKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A row of raw column values, in result-set order
pub type Row = Vec<Value>;

/// An open-map row: every non-null column keyed by name
pub type MapRow = HashMap<String, Value>;

/// Column values.
///
/// Drivers deliver the raw subset `Null | Bool | I64 | F64 | Str | Bytes`;
/// the remaining variants are produced by conversion (numeric narrowing,
/// JSON decoding into lists and maps).
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    // Integer types
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    // Float types
    F32(f32),
    F64(f64),
    Str(String),
    Bytes(Vec<u8>),
    // Collection types (JSON decoding output)
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is any integer type
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Value::I8(_)
                | Value::I16(_)
                | Value::I32(_)
                | Value::I64(_)
                | Value::U8(_)
                | Value::U16(_)
                | Value::U32(_)
                | Value::U64(_)
        )
    }

    /// Convert any integer variant to i128 by value. Every variant fits.
    pub fn to_i128(&self) -> Result<i128> {
        match self {
            Value::I8(v) => Ok(*v as i128),
            Value::I16(v) => Ok(*v as i128),
            Value::I32(v) => Ok(*v as i128),
            Value::I64(v) => Ok(*v as i128),
            Value::U8(v) => Ok(*v as i128),
            Value::U16(v) => Ok(*v as i128),
            Value::U32(v) => Ok(*v as i128),
            Value::U64(v) => Ok(*v as i128),
            _ => Err(Error::UnsupportedConversion {
                expected: "integer".into(),
                found: self.type_name().into(),
            }),
        }
    }

    /// Check whether this value is already exactly the declared kind.
    pub fn matches(&self, kind: &FieldKind) -> bool {
        matches!(
            (self, kind),
            (Value::Bool(_), FieldKind::Bool)
                | (Value::I8(_), FieldKind::I8)
                | (Value::I16(_), FieldKind::I16)
                | (Value::I32(_), FieldKind::I32)
                | (Value::I64(_), FieldKind::I64)
                | (Value::U8(_), FieldKind::U8)
                | (Value::U16(_), FieldKind::U16)
                | (Value::U32(_), FieldKind::U32)
                | (Value::U64(_), FieldKind::U64)
                | (Value::F32(_), FieldKind::F32)
                | (Value::F64(_), FieldKind::F64)
                | (Value::Str(_), FieldKind::Str)
                | (Value::Bytes(_), FieldKind::Bytes)
                | (Value::Map(_), FieldKind::Map)
        )
    }

    /// Variant name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

macro_rules! value_accessor {
    ($name:ident, $variant:ident, $ty:ty, $expected:literal) => {
        impl Value {
            /// Unwrap the value, failing on any other variant.
            pub fn $name(self) -> Result<$ty> {
                match self {
                    Value::$variant(v) => Ok(v),
                    other => Err(Error::UnsupportedConversion {
                        expected: $expected.into(),
                        found: other.type_name().into(),
                    }),
                }
            }
        }
    };
}

value_accessor!(into_bool, Bool, bool, "bool");
value_accessor!(into_i8, I8, i8, "i8");
value_accessor!(into_i16, I16, i16, "i16");
value_accessor!(into_i32, I32, i32, "i32");
value_accessor!(into_i64, I64, i64, "i64");
value_accessor!(into_u8, U8, u8, "u8");
value_accessor!(into_u16, U16, u16, "u16");
value_accessor!(into_u32, U32, u32, "u32");
value_accessor!(into_u64, U64, u64, "u64");
value_accessor!(into_f32, F32, f32, "f32");
value_accessor!(into_f64, F64, f64, "f64");
value_accessor!(into_string, Str, String, "str");
value_accessor!(into_bytes, Bytes, Vec<u8>, "bytes");
value_accessor!(into_list, List, Vec<Value>, "list");
value_accessor!(into_map, Map, HashMap<String, Value>, "map");

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I8(i) => write!(f, "{}", i),
            Value::I16(i) => write!(f, "{}", i),
            Value::I32(i) => write!(f, "{}", i),
            Value::I64(i) => write!(f, "{}", i),
            Value::U8(i) => write!(f, "{}", i),
            Value::U16(i) => write!(f, "{}", i),
            Value::U32(i) => write!(f, "{}", i),
            Value::U64(i) => write!(f, "{}", i),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "'{}'", s),
            Value::Bytes(b) => write!(f, "x'{}'", hex::encode(b)),
            Value::List(l) => write!(f, "{:?}", l),
            Value::Map(m) => write!(f, "{:?}", m),
        }
    }
}

// Debug mirrors the variant structure for nicer test output
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::I8(i) => write!(f, "I8({})", i),
            Value::I16(i) => write!(f, "I16({})", i),
            Value::I32(i) => write!(f, "I32({})", i),
            Value::I64(i) => write!(f, "I64({})", i),
            Value::U8(i) => write!(f, "U8({})", i),
            Value::U16(i) => write!(f, "U16({})", i),
            Value::U32(i) => write!(f, "U32({})", i),
            Value::U64(i) => write!(f, "U64({})", i),
            Value::F32(v) => write!(f, "F32({})", v),
            Value::F64(v) => write!(f, "F64({})", v),
            Value::Str(s) => write!(f, "Str({})", s),
            Value::Bytes(b) => write!(f, "Bytes({})", hex::encode(b)),
            Value::List(l) => {
                write!(f, "List[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", v)?;
                }
                write!(f, "]")
            }
            Value::Map(m) => write!(f, "Map({:?})", m),
        }
    }
}
