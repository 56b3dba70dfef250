//! The result materializer
//!
//! Consumes column names plus a stream of raw rows and produces one
//! populated container per row, either open maps or record values. The
//! element type is fixed by the entry point before the first row is read;
//! any driver or conversion failure aborts the whole call and discards
//! every row built so far.

use crate::convert;
use crate::error::{Error, Result};
use crate::types::{BindingTable, MapRow, Record, Row, Value, bindings_for};

/// Materialize a result set into open-map rows.
///
/// Each output map holds exactly the non-null columns of its row, keyed by
/// column name. Byte-buffer values are indistinguishable from text at this
/// layer and are decoded as text.
pub fn materialize_maps<I>(columns: &[String], rows: I) -> Result<Vec<MapRow>>
where
    I: IntoIterator<Item = Result<Row>>,
{
    let mut out = Vec::new();
    for row in rows {
        let row = check_width(columns, row?)?;
        let mut map = MapRow::with_capacity(columns.len());
        for (name, value) in columns.iter().zip(row) {
            match value {
                // Null columns are omitted entirely.
                Value::Null => {}
                Value::Bytes(bytes) => {
                    map.insert(name.clone(), Value::Str(convert::decode_text(bytes)));
                }
                value => {
                    map.insert(name.clone(), value);
                }
            }
        }
        out.push(map);
    }
    Ok(out)
}

/// Materialize a result set into record values.
///
/// Columns absent from the record's binding table are ignored; declared
/// fields with no matching column (or a null one) keep their default value.
pub fn materialize_records<T, I>(columns: &[String], rows: I) -> Result<Vec<T>>
where
    T: Record + 'static,
    I: IntoIterator<Item = Result<Row>>,
{
    let bindings = bindings_for::<T>()?;
    materialize_records_bound(columns, rows, &bindings)
}

/// Record-path materialization against an already-resolved binding table.
pub(crate) fn materialize_records_bound<T, I>(
    columns: &[String],
    rows: I,
    bindings: &BindingTable,
) -> Result<Vec<T>>
where
    T: Record,
    I: IntoIterator<Item = Result<Row>>,
{
    let mut out = Vec::new();
    for row in rows {
        let row = check_width(columns, row?)?;
        let mut record = T::default();
        for (name, raw) in columns.iter().zip(row) {
            let Some(binding) = bindings.get(name) else {
                continue;
            };
            if raw.is_null() {
                continue;
            }
            match convert::apply(raw, binding)? {
                // JSON literal null leaves the slot at its default.
                Value::Null => {}
                value => record.write(binding.slot, value)?,
            }
        }
        out.push(record);
    }
    Ok(out)
}

fn check_width(columns: &[String], row: Row) -> Result<Row> {
    if row.len() != columns.len() {
        return Err(Error::Driver(format!(
            "row has {} values but the result set has {} columns",
            row.len(),
            columns.len()
        )));
    }
    Ok(row)
}
