//! Canonical JSON encoding and schema-directed decoding of record snapshots.
//!
//! The canonical on-disk form is a JSON array with one object per record, fields in
//! schema order, indented with four spaces. Decoding the canonical text with the same
//! schema reproduces an equivalent [`RecordSet`], so snapshots round-trip
//! field-for-field.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::{SnapshotError, SnapshotResult};
use crate::types::{DataType, RecordSet, Schema, Value};

/// Render a record set as canonical snapshot text.
///
/// # Errors
///
/// [`SnapshotError::Value`] if a cell cannot be represented in JSON (a non-finite
/// float); nothing is dropped or rounded silently.
pub fn encode_snapshot(records: &RecordSet) -> SnapshotResult<String> {
    let mut items: Vec<serde_json::Value> = Vec::with_capacity(records.record_count());
    for (idx, record) in records.records.iter().enumerate() {
        let mut obj = serde_json::Map::new();
        for (field, cell) in records.schema.fields.iter().zip(record.iter()) {
            obj.insert(field.name.clone(), encode_cell(idx + 1, &field.name, cell)?);
        }
        items.push(serde_json::Value::Object(obj));
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    items.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json emits valid utf-8"))
}

/// Decode canonical snapshot text into a [`RecordSet`] shaped by `schema`.
///
/// Field order inside each object does not matter; every schema field must be present
/// in every object. JSON `null` decodes to [`Value::Null`].
///
/// # Errors
///
/// - [`SnapshotError::Json`] if the input is not valid JSON.
/// - [`SnapshotError::Malformed`] if the input is empty, not an array of objects, or an
///   object is missing a schema field.
/// - [`SnapshotError::Value`] if a cell does not match the schema's type.
pub fn decode_snapshot(input: &str, schema: &Schema) -> SnapshotResult<RecordSet> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SnapshotError::Malformed {
            message: "snapshot input is empty".to_string(),
        });
    }

    let parsed: serde_json::Value = serde_json::from_str(trimmed)?;
    let items = match parsed {
        serde_json::Value::Array(items) => items,
        _ => {
            return Err(SnapshotError::Malformed {
                message: "snapshot must be a json array of objects".to_string(),
            });
        }
    };

    let mut records: Vec<Vec<Value>> = Vec::with_capacity(items.len());
    for (idx0, item) in items.iter().enumerate() {
        let record_num = idx0 + 1;
        let obj = item.as_object().ok_or_else(|| SnapshotError::Malformed {
            message: format!("record {record_num} is not a json object"),
        })?;

        let mut record: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for field in &schema.fields {
            let jv = obj.get(&field.name).ok_or_else(|| SnapshotError::Malformed {
                message: format!(
                    "record {record_num} missing required field '{}'",
                    field.name
                ),
            })?;
            record.push(decode_cell(record_num, &field.name, &field.data_type, jv)?);
        }
        records.push(record);
    }

    Ok(RecordSet::new(schema.clone(), records))
}

fn encode_cell(record: usize, field: &str, value: &Value) -> SnapshotResult<serde_json::Value> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Int64(i) => serde_json::Value::from(*i),
        Value::Float64(v) => match serde_json::Number::from_f64(*v) {
            Some(n) => serde_json::Value::Number(n),
            None => {
                return Err(SnapshotError::Value {
                    record,
                    field: field.to_string(),
                    raw: v.to_string(),
                    message: "non-finite float has no json representation".to_string(),
                });
            }
        },
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Utf8(s) => serde_json::Value::String(s.clone()),
    })
}

fn decode_cell(
    record: usize,
    field: &str,
    data_type: &DataType,
    v: &serde_json::Value,
) -> SnapshotResult<Value> {
    if v.is_null() {
        return Ok(Value::Null);
    }

    match data_type {
        DataType::Utf8 => v
            .as_str()
            .map(|s| Value::Utf8(s.to_string()))
            .ok_or_else(|| SnapshotError::Value {
                record,
                field: field.to_string(),
                raw: v.to_string(),
                message: "expected string".to_string(),
            }),
        DataType::Bool => v.as_bool().map(Value::Bool).ok_or_else(|| SnapshotError::Value {
            record,
            field: field.to_string(),
            raw: v.to_string(),
            message: "expected bool".to_string(),
        }),
        DataType::Int64 => {
            if let Some(n) = v.as_i64() {
                Ok(Value::Int64(n))
            } else if let Some(n) = v.as_u64() {
                i64::try_from(n).map(Value::Int64).map_err(|_| SnapshotError::Value {
                    record,
                    field: field.to_string(),
                    raw: v.to_string(),
                    message: "u64 out of range for i64".to_string(),
                })
            } else {
                Err(SnapshotError::Value {
                    record,
                    field: field.to_string(),
                    raw: v.to_string(),
                    message: "expected integer number".to_string(),
                })
            }
        }
        DataType::Float64 => v.as_f64().map(Value::Float64).ok_or_else(|| SnapshotError::Value {
            record,
            field: field.to_string(),
            raw: v.to_string(),
            message: "expected number".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_snapshot, encode_snapshot};
    use crate::types::{DataType, Field, RecordSet, Schema, Value};

    fn car_schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("make", DataType::Utf8),
            Field::new("price", DataType::Int64),
        ])
    }

    fn car_records() -> RecordSet {
        RecordSet::new(
            car_schema(),
            vec![
                vec![
                    Value::Int64(1),
                    Value::Utf8("Toyota".to_string()),
                    Value::Int64(56500),
                ],
                vec![
                    Value::Int64(2),
                    Value::Utf8("Honda".to_string()),
                    Value::Int64(22000),
                ],
            ],
        )
    }

    #[test]
    fn encode_uses_four_space_indent_and_schema_field_order() {
        let text = encode_snapshot(&car_records()).unwrap();
        let expected = r#"[
    {
        "id": 1,
        "make": "Toyota",
        "price": 56500
    },
    {
        "id": 2,
        "make": "Honda",
        "price": 22000
    }
]"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn decode_reads_canonical_text_back() {
        let rs = car_records();
        let decoded = decode_snapshot(&encode_snapshot(&rs).unwrap(), &rs.schema).unwrap();
        assert_eq!(decoded, rs);
    }

    #[test]
    fn decode_accepts_reordered_object_fields() {
        let input = r#"[{"price": 18000, "id": 4, "make": "Chevrolet"}]"#;
        let rs = decode_snapshot(input, &car_schema()).unwrap();
        assert_eq!(rs.record_count(), 1);
        assert_eq!(rs.records[0][0], Value::Int64(4));
        assert_eq!(rs.records[0][2], Value::Int64(18000));
    }

    #[test]
    fn null_cells_round_trip() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("note", DataType::Utf8),
        ]);
        let rs = RecordSet::new(schema, vec![vec![Value::Int64(1), Value::Null]]);

        let text = encode_snapshot(&rs).unwrap();
        assert!(text.contains("\"note\": null"));
        let decoded = decode_snapshot(&text, &rs.schema).unwrap();
        assert_eq!(decoded, rs);
    }

    #[test]
    fn empty_record_set_round_trips() {
        let rs = RecordSet::new(car_schema(), vec![]);
        let text = encode_snapshot(&rs).unwrap();
        assert_eq!(text, "[]");
        let decoded = decode_snapshot(&text, &rs.schema).unwrap();
        assert_eq!(decoded, rs);
    }

    #[test]
    fn encode_rejects_non_finite_floats() {
        let schema = Schema::new(vec![Field::new("x", DataType::Float64)]);
        let rs = RecordSet::new(schema, vec![vec![Value::Float64(f64::INFINITY)]]);
        let err = encode_snapshot(&rs).unwrap_err();
        assert!(err.to_string().contains("non-finite float"));
    }

    #[test]
    fn decode_errors_on_empty_input() {
        let err = decode_snapshot("  \n ", &car_schema()).unwrap_err();
        assert!(err.to_string().contains("snapshot input is empty"));
    }

    #[test]
    fn decode_errors_on_non_array_input() {
        let err = decode_snapshot(r#"{"id": 1}"#, &car_schema()).unwrap_err();
        assert!(err.to_string().contains("must be a json array"));
    }

    #[test]
    fn decode_errors_on_missing_field() {
        let input = r#"[{"id": 1, "make": "Toyota"}]"#;
        let err = decode_snapshot(input, &car_schema()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("malformed snapshot"));
        assert!(msg.contains("record 1 missing required field 'price'"));
    }

    #[test]
    fn decode_errors_on_type_mismatch() {
        let input = r#"[{"id": "one", "make": "Toyota", "price": 56500}]"#;
        let err = decode_snapshot(input, &car_schema()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("failed to convert value"));
        assert!(msg.contains("field 'id'"));
        assert!(msg.contains("expected integer number"));
    }
}
