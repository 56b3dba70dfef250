//! Common test utilities for materialization integration tests
#![allow(dead_code)]

use rowcast::{
    Error, Executor, FieldDef, FieldKind, QueryResult, Record, Result, Row, RowStream,
    StatementResult, Value,
};
use std::collections::HashMap;

/// In-memory executor serving one canned result set and one canned
/// statement outcome, independent of the SQL text.
#[derive(Clone, Default)]
pub struct MemoryExecutor {
    columns: Vec<String>,
    rows: Vec<Row>,
    statement: Option<StatementResult>,
    fail_query: Option<String>,
    fail_scan_after: Option<usize>,
}

impl MemoryExecutor {
    pub fn with_result(columns: &[&str], rows: Vec<Row>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            ..Self::default()
        }
    }

    pub fn with_statement(last_insert_id: i64, rows_affected: u64) -> Self {
        Self {
            statement: Some(StatementResult {
                last_insert_id,
                rows_affected,
            }),
            ..Self::default()
        }
    }

    /// Fail query execution before any row is delivered
    pub fn failing(message: &str) -> Self {
        Self {
            fail_query: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Deliver the first `n` rows, then fail the row stream
    pub fn fail_scan_after(mut self, n: usize) -> Self {
        self.fail_scan_after = Some(n);
        self
    }
}

impl Executor for MemoryExecutor {
    fn execute_query(&self, _sql: &str, _params: &[Value]) -> Result<QueryResult> {
        if let Some(message) = &self.fail_query {
            return Err(Error::Driver(message.clone()));
        }
        let rows = self.rows.clone();
        let stream: RowStream = match self.fail_scan_after {
            Some(n) => Box::new(
                rows.into_iter()
                    .take(n)
                    .map(Ok)
                    .chain(std::iter::once(Err(Error::Driver(
                        "connection reset during scan".into(),
                    )))),
            ),
            None => Box::new(rows.into_iter().map(Ok)),
        };
        Ok(QueryResult {
            columns: self.columns.clone(),
            rows: stream,
        })
    }

    fn execute_statement(&self, _sql: &str, _params: &[Value]) -> Result<StatementResult> {
        if let Some(message) = &self.fail_query {
            return Err(Error::Driver(message.clone()));
        }
        self.statement
            .ok_or_else(|| Error::Driver("no statement result configured".into()))
    }
}

/// Record destination mirroring a typical content table
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub count: i32,
    pub money: f64,
    pub data: String,
    pub list: Vec<HashMap<String, Value>>,
    pub images: Vec<String>,
    pub ext: HashMap<String, Value>,
    pub time: i64,
}

impl Record for Item {
    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("id", FieldKind::I64),
            FieldDef::new("name", FieldKind::Str),
            FieldDef::new("count", FieldKind::I32),
            FieldDef::new("money", FieldKind::F64),
            FieldDef::new("data", FieldKind::Str),
            FieldDef::bound("list", FieldKind::List(Box::new(FieldKind::Map)), "list,json"),
            FieldDef::bound(
                "images",
                FieldKind::List(Box::new(FieldKind::Str)),
                "images,json",
            ),
            FieldDef::bound("ext", FieldKind::Map, "ext,json"),
            FieldDef::bound("time", FieldKind::I64, "time,time"),
        ]
    }

    fn write(&mut self, slot: usize, value: Value) -> Result<()> {
        match slot {
            0 => self.id = value.into_i64()?,
            1 => self.name = value.into_string()?,
            2 => self.count = value.into_i32()?,
            3 => self.money = value.into_f64()?,
            4 => self.data = value.into_string()?,
            5 => {
                self.list = value
                    .into_list()?
                    .into_iter()
                    .map(Value::into_map)
                    .collect::<Result<Vec<_>>>()?
            }
            6 => {
                self.images = value
                    .into_list()?
                    .into_iter()
                    .map(Value::into_string)
                    .collect::<Result<Vec<_>>>()?
            }
            7 => self.ext = value.into_map()?,
            8 => self.time = value.into_i64()?,
            _ => {}
        }
        Ok(())
    }
}

pub fn bytes(s: &str) -> Value {
    Value::Bytes(s.as_bytes().to_vec())
}
