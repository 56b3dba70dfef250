//! Query and statement helpers over a driver executor

use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::materialize::{self, materialize_maps};
use crate::types::{MapRow, Record, Value, bindings_for};

/// A database handle wrapping a driver executor.
///
/// All methods take `&self`; concurrent calls are safe as long as the
/// executor's own discipline allows them.
pub struct Db<E> {
    executor: E,
}

impl<E: Executor> Db<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Query into a sequence of open-map rows, one per result row
    pub fn query_maps(&self, sql: &str, params: &[Value]) -> Result<Vec<MapRow>> {
        let result = self.executor.execute_query(sql, params)?;
        materialize_maps(&result.columns, result.rows)
    }

    /// Query into a sequence of record values, one per result row
    pub fn query_records<T: Record + 'static>(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<T>> {
        // Destination validation happens before the query executes.
        let bindings = bindings_for::<T>()?;
        let result = self.executor.execute_query(sql, params)?;
        materialize::materialize_records_bound(&result.columns, result.rows, &bindings)
    }

    /// Execute an insert and return the last insert id
    pub fn insert(&self, sql: &str, params: &[Value]) -> Result<i64> {
        let result = self.executor.execute_statement(sql, params)?;
        Ok(result.last_insert_id)
    }

    /// Update expecting at least one matched row.
    ///
    /// Zero affected rows is `NotFound`, distinguishing a no-op update from
    /// success.
    pub fn update(&self, sql: &str, params: &[Value]) -> Result<()> {
        if self.update_all(sql, params)? < 1 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Update all matching rows and return the affected count. Zero is fine.
    pub fn update_all(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let result = self.executor.execute_statement(sql, params)?;
        Ok(result.rows_affected)
    }
}
