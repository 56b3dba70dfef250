//! Declared field kinds for record destinations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared kind of a record field.
///
/// This is a closed enumeration: the materializer dispatches on these
/// variants, never on runtime type information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Str,
    Bytes,
    /// Open string-keyed map, populated from a JSON object column.
    Map,
    /// Sequence with a declared element kind.
    List(Box<FieldKind>),
}

impl FieldKind {
    /// Check if this kind is an integer (signed or unsigned)
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            FieldKind::I8
                | FieldKind::I16
                | FieldKind::I32
                | FieldKind::I64
                | FieldKind::U8
                | FieldKind::U16
                | FieldKind::U32
                | FieldKind::U64
        )
    }

    /// Check if this kind is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, FieldKind::F32 | FieldKind::F64)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::I8 => write!(f, "i8"),
            FieldKind::I16 => write!(f, "i16"),
            FieldKind::I32 => write!(f, "i32"),
            FieldKind::I64 => write!(f, "i64"),
            FieldKind::U8 => write!(f, "u8"),
            FieldKind::U16 => write!(f, "u16"),
            FieldKind::U32 => write!(f, "u32"),
            FieldKind::U64 => write!(f, "u64"),
            FieldKind::F32 => write!(f, "f32"),
            FieldKind::F64 => write!(f, "f64"),
            FieldKind::Str => write!(f, "str"),
            FieldKind::Bytes => write!(f, "bytes"),
            FieldKind::Map => write!(f, "map"),
            FieldKind::List(elem) => write!(f, "list<{}>", elem),
        }
    }
}
