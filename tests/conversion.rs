mod common;

use common::{Item, MemoryExecutor, bytes};
use rowcast::{Db, Error, FieldDef, FieldKind, Record, Result, Value};

#[test]
fn test_json_sequence_round_trip() {
    // Serialize a sequence to JSON text, store it as a column, materialize
    // it back.
    let images = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let encoded = serde_json::to_string(&images).unwrap();
    let db = Db::new(MemoryExecutor::with_result(
        &["images"],
        vec![vec![bytes(&encoded)]],
    ));

    let items: Vec<Item> = db.query_records("SELECT images FROM test", &[]).unwrap();
    assert_eq!(items[0].images, images);
}

#[test]
fn test_json_literal_null_leaves_default() {
    // Scenario: the column holds the JSON text `null`, not SQL NULL. The
    // field stays empty rather than becoming an empty container.
    let db = Db::new(MemoryExecutor::with_result(
        &["id", "images", "ext"],
        vec![vec![Value::I64(11), bytes("null"), bytes("null")]],
    ));

    let items: Vec<Item> = db.query_records("SELECT * FROM test", &[]).unwrap();
    assert_eq!(items[0].id, 11);
    assert_eq!(items[0].images, Vec::<String>::new());
    assert!(items[0].ext.is_empty());
}

#[test]
fn test_json_empty_containers_are_set() {
    let db = Db::new(MemoryExecutor::with_result(
        &["images", "ext"],
        vec![vec![bytes("[]"), bytes("{}")]],
    ));
    let items: Vec<Item> = db.query_records("SELECT * FROM test", &[]).unwrap();
    assert_eq!(items[0].images, Vec::<String>::new());
    assert!(items[0].ext.is_empty());
}

#[test]
fn test_byte_buffer_parses_into_scalars() {
    // Some drivers deliver numeric columns as byte buffers; they parse into
    // the declared kinds.
    let db = Db::new(MemoryExecutor::with_result(
        &["id", "count", "money"],
        vec![vec![bytes("7"), bytes("3"), bytes("1.25")]],
    ));
    let items: Vec<Item> = db.query_records("SELECT * FROM test", &[]).unwrap();
    assert_eq!(items[0].id, 7);
    assert_eq!(items[0].count, 3);
    assert_eq!(items[0].money, 1.25);
}

#[test]
fn test_parse_failure_aborts_call() {
    let db = Db::new(MemoryExecutor::with_result(
        &["count"],
        vec![vec![bytes("3")], vec![bytes("not a number")]],
    ));
    let err = db
        .query_records::<Item>("SELECT count FROM test", &[])
        .unwrap_err();
    assert_eq!(
        err,
        Error::Conversion("cannot parse 'not a number' as i32".into())
    );
}

#[test]
fn test_numeric_widening_by_value() {
    // Raw i64 into an i32 field converts by value.
    let db = Db::new(MemoryExecutor::with_result(
        &["count"],
        vec![vec![Value::I64(41)]],
    ));
    let items: Vec<Item> = db.query_records("SELECT count FROM test", &[]).unwrap();
    assert_eq!(items[0].count, 41);
}

#[test]
fn test_numeric_out_of_range_aborts_call() {
    let db = Db::new(MemoryExecutor::with_result(
        &["count"],
        vec![vec![Value::I64(i64::MAX)]],
    ));
    let err = db
        .query_records::<Item>("SELECT count FROM test", &[])
        .unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
}

#[test]
fn test_unsupported_conversion() {
    let db = Db::new(MemoryExecutor::with_result(
        &["count"],
        vec![vec![Value::Bool(true)]],
    ));
    let err = db
        .query_records::<Item>("SELECT count FROM test", &[])
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedConversion {
            expected: "i32".into(),
            found: "bool".into(),
        }
    );
}

/// Record with a json tag on a scalar field
#[derive(Debug, Default)]
struct BadJsonTarget {
    total: i64,
}

impl Record for BadJsonTarget {
    fn fields() -> Vec<FieldDef> {
        vec![FieldDef::bound("total", FieldKind::I64, "total,json")]
    }

    fn write(&mut self, _slot: usize, value: Value) -> Result<()> {
        self.total = value.into_i64()?;
        Ok(())
    }
}

#[test]
fn test_json_tag_on_scalar_field() {
    let db = Db::new(MemoryExecutor::with_result(
        &["total"],
        vec![vec![bytes("{}")]],
    ));
    let err = db
        .query_records::<BadJsonTarget>("SELECT total FROM test", &[])
        .unwrap_err();
    assert_eq!(
        err,
        Error::IllegalFieldType {
            field: "total".into(),
            kind: "i64".into(),
            tag: "json".into(),
        }
    );
}

#[test]
fn test_json_tag_on_scalar_with_no_rows_succeeds() {
    // Tag-kind compatibility is a per-row concern; an empty result set
    // never trips it.
    let db = Db::new(MemoryExecutor::with_result(&["total"], vec![]));
    let items: Vec<BadJsonTarget> = db.query_records("SELECT total FROM test", &[]).unwrap();
    assert!(items.is_empty());
}

/// Record with an unknown conversion name in its binding text
#[derive(Debug, Default)]
struct BadBinding {
    id: i64,
}

impl Record for BadBinding {
    fn fields() -> Vec<FieldDef> {
        vec![FieldDef::bound("id", FieldKind::I64, "id,uuid")]
    }

    fn write(&mut self, _slot: usize, value: Value) -> Result<()> {
        self.id = value.into_i64()?;
        Ok(())
    }
}

#[test]
fn test_invalid_destination_detected_before_query_runs() {
    // A failing executor never gets the chance to report: the destination
    // check comes first.
    let db = Db::new(MemoryExecutor::failing("should not run"));
    let err = db
        .query_records::<BadBinding>("SELECT id FROM test", &[])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDestination(_)));
}
