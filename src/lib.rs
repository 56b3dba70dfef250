//! Row materialization between a SQL driver and typed application containers
//!
//! This crate consumes column names and raw column values from a
//! driver-level result set and populates either open maps or record types
//! with declared field bindings, applying per-field conversion rules:
//! - direct type match and numeric conversion by value
//! - byte-buffer decoding and textual parsing into scalars
//! - JSON decoding into map and list fields (`json` tag)
//! - local timestamp parsing into Unix milliseconds (`time` tag)
//!
//! Null columns never touch the destination: open maps omit them, record
//! fields keep their default value.

mod convert;
mod db;
mod error;
mod executor;
mod materialize;
mod types;
mod where_clause;

pub use db::Db;
pub use error::{Error, Result};
pub use executor::{Executor, QueryResult, RowStream, StatementResult};
pub use materialize::{materialize_maps, materialize_records};
pub use types::schema::{Binding, BindingTable, Conversion, FieldDef, Record, bindings_for};
pub use types::{FieldKind, MapRow, Row, Value};
pub use where_clause::Where;
