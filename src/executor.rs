//! The contract with the underlying SQL driver
//!
//! The driver is an external collaborator: it owns connections,
//! transactions, and the wire protocol, and delivers column values already
//! decoded into the raw [`Value`] subset. Driver failures are wrapped in
//! [`Error::Driver`](crate::Error::Driver) and propagated verbatim.

use crate::error::Result;
use crate::types::{Row, Value};

/// Per-row stream of raw decoded column values, in column order.
///
/// The stream may fail at any point; the materializer stops immediately and
/// propagates the error without returning a partial result.
pub type RowStream = Box<dyn Iterator<Item = Result<Row>> + Send>;

/// Column metadata plus the row stream for one executed query
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: RowStream,
}

/// Outcome of a non-query statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementResult {
    pub last_insert_id: i64,
    pub rows_affected: u64,
}

/// Implemented by the driver/connection layer
pub trait Executor {
    fn execute_query(&self, sql: &str, params: &[Value]) -> Result<QueryResult>;

    fn execute_statement(&self, sql: &str, params: &[Value]) -> Result<StatementResult>;
}
