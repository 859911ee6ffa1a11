use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tabular_query::snapshot::{
    encode_snapshot, load_snapshot, save_snapshot, SnapshotOptions,
};
use tabular_query::types::{DataType, Field, RecordSet, Schema, Value};
use tabular_query::SnapshotError;

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tabular-query-snapshot-{nanos}.{ext}"))
}

fn inventory_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("make", DataType::Utf8),
        Field::new("model", DataType::Utf8),
        Field::new("year", DataType::Int64),
        Field::new("price", DataType::Int64),
    ])
}

fn inventory_records() -> RecordSet {
    let records = vec![
        (1, "Toyota", "Camry", 2021, 56500),
        (2, "Honda", "Civic", 2020, 22000),
        (3, "Ford", "Mustang", 2022, 30000),
        (4, "Chevrolet", "Cruze", 2019, 18000),
        (5, "Nissan", "Altima", 2023, 28000),
    ]
    .into_iter()
    .map(|(id, make, model, year, price)| {
        vec![
            Value::Int64(id),
            Value::Utf8(make.to_string()),
            Value::Utf8(model.to_string()),
            Value::Int64(year),
            Value::Int64(price),
        ]
    })
    .collect();
    RecordSet::new(inventory_schema(), records)
}

#[test]
fn save_then_load_reproduces_an_equivalent_record_set() {
    let rs = inventory_records();
    let path = tmp_file("json");
    let opts = SnapshotOptions::default();

    save_snapshot(&rs, &path, &opts).unwrap();
    let reloaded = load_snapshot(&path, &rs.schema, &opts).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded, rs);
}

#[test]
fn saved_file_uses_four_space_indentation() {
    let rs = inventory_records();
    let path = tmp_file("json");

    save_snapshot(&rs, &path, &SnapshotOptions::default()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(text, encode_snapshot(&rs).unwrap());
    assert!(text.starts_with("[\n    {\n        \"id\": 1,\n"));
    // Exactly one object per record, every field present.
    assert_eq!(text.matches("\"model\":").count(), rs.record_count());
}

#[test]
fn values_of_every_type_round_trip_through_a_file() {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("score", DataType::Float64),
        Field::new("active", DataType::Bool),
        Field::new("note", DataType::Utf8),
    ]);
    let rs = RecordSet::new(
        schema,
        vec![
            vec![
                Value::Int64(-7),
                Value::Float64(98.5),
                Value::Bool(true),
                Value::Utf8("ok".to_string()),
            ],
            vec![Value::Int64(8), Value::Null, Value::Bool(false), Value::Null],
        ],
    );
    let path = tmp_file("json");
    let opts = SnapshotOptions::default();

    save_snapshot(&rs, &path, &opts).unwrap();
    let reloaded = load_snapshot(&path, &rs.schema, &opts).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded, rs);
}

#[test]
fn load_from_missing_file_is_an_io_error() {
    let err = load_snapshot(
        tmp_file("json"),
        &inventory_schema(),
        &SnapshotOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SnapshotError::Io(_)));
}

#[test]
fn load_with_wrong_schema_reports_the_missing_field() {
    let rs = inventory_records();
    let path = tmp_file("json");
    save_snapshot(&rs, &path, &SnapshotOptions::default()).unwrap();

    let wrong = Schema::new(vec![Field::new("vin", DataType::Utf8)]);
    let err = load_snapshot(&path, &wrong, &SnapshotOptions::default()).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(err
        .to_string()
        .contains("record 1 missing required field 'vin'"));
}
