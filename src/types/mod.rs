//! The data model shared by the materializer and conversion rules.

pub mod kind;
pub mod schema;
pub mod value;

pub use kind::FieldKind;
pub use schema::{Binding, BindingTable, Conversion, FieldDef, Record, bindings_for};
pub use value::{MapRow, Row, Value};
