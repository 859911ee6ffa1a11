//! Core data model types for the query operations.
//!
//! A [`RecordSet`] is an ordered sequence of uniformly shaped records described by a
//! user-provided [`Schema`] (a list of typed [`Field`]s). Record sets are immutable
//! snapshots: every operation in this crate takes `&RecordSet` and never mutates it.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{QueryError, QueryResult};

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// An ordered list of fields describing the shape shared by every record in a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns the index of a field by name, failing with [`QueryError::FieldNotFound`]
    /// if the schema has no such field.
    pub fn require(&self, name: &str) -> QueryResult<usize> {
        self.index_of(name).ok_or_else(|| QueryError::FieldNotFound {
            field: name.to_string(),
        })
    }
}

/// A single typed value in a [`RecordSet`].
///
/// `Value` carries total equality, hashing, and ordering so it can serve as a group key
/// and live in distinct sets:
///
/// - `NaN == NaN` and `0.0 == -0.0` (both normalized before hashing, so equal values
///   hash equally).
/// - Ordering is total: variants rank `Null < Bool < Int64 < Float64 < Utf8`, values
///   order naturally within a variant, and `NaN` sorts after every other float. This is
///   what lets callers sort a distinct set deterministically.
#[derive(Debug, Clone)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric coercion: `Some` for `Int64` and `Float64`, `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(i) => Some(*i as f64),
            Value::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Boolean coercion: `Some` for `Bool`, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short lowercase type label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int64(_) => "int64",
            Value::Float64(_) => "float64",
            Value::Bool(_) => "bool",
            Value::Utf8(_) => "utf8",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int64(_) => 2,
            Value::Float64(_) => 3,
            Value::Utf8(_) => 4,
        }
    }
}

/// Float bits with NaN and negative zero normalized, so equality and hashing agree.
fn canonical_bits(f: f64) -> u64 {
    if f.is_nan() {
        f64::NAN.to_bits()
    } else if f == 0.0 {
        0f64.to_bits()
    } else {
        f.to_bits()
    }
}

fn cmp_f64_total(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Utf8(a), Value::Utf8(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Int64(i) => i.hash(state),
            Value::Float64(f) => canonical_bits(*f).hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Utf8(s) => s.hash(state),
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Float64(a), Value::Float64(b)) => cmp_f64_total(*a, *b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Utf8(a), Value::Utf8(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int64(i) => write!(f, "{i}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Utf8(s) => write!(f, "{s}"),
        }
    }
}

/// In-memory tabular record set.
///
/// Records are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
/// Input order is preserved; the aggregation operations do not depend on it, but filter
/// results and display do.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    /// Schema describing record shape.
    pub schema: Schema,
    /// Record-major value storage.
    pub records: Vec<Vec<Value>>,
}

impl RecordSet {
    /// Create a record set from schema and records.
    ///
    /// # Panics
    ///
    /// Panics if any record's length differs from the schema field count; records are
    /// uniformly shaped by construction.
    pub fn new(schema: Schema, records: Vec<Vec<Value>>) -> Self {
        let expected_len = schema.fields.len();
        for (i, record) in records.iter().enumerate() {
            assert!(
                record.len() == expected_len,
                "record {} length {} does not match schema length {}",
                i,
                record.len(),
                expected_len
            );
        }
        Self { schema, records }
    }

    /// Number of records in the set.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a new record set containing only records that match `predicate`,
    /// preserving input order.
    ///
    /// The returned set keeps the original schema. An empty result is an ordinary
    /// record set, not an error.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::{DataType, Field, RecordSet, Schema, Value};

    fn hash_of(v: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn schema_index_of_and_require() {
        let schema = Schema::new(vec![
            Field::new("zone", DataType::Utf8),
            Field::new("weight", DataType::Int64),
        ]);
        assert_eq!(schema.index_of("zone"), Some(0));
        assert_eq!(schema.index_of("weight"), Some(1));
        assert_eq!(schema.index_of("missing"), None);

        assert_eq!(schema.require("weight").unwrap(), 1);
        let err = schema.require("missing").unwrap_err();
        assert!(err.to_string().contains("field not found: 'missing'"));
    }

    #[test]
    fn value_equality_normalizes_nan_and_negative_zero() {
        assert_eq!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
        assert_eq!(Value::Float64(0.0), Value::Float64(-0.0));
        assert_ne!(Value::Float64(1.0), Value::Int64(1));
        assert_ne!(Value::Null, Value::Bool(false));
    }

    #[test]
    fn value_hash_is_consistent_with_equality() {
        assert_eq!(
            hash_of(&Value::Float64(f64::NAN)),
            hash_of(&Value::Float64(f64::NAN))
        );
        assert_eq!(hash_of(&Value::Float64(0.0)), hash_of(&Value::Float64(-0.0)));
        assert_eq!(
            hash_of(&Value::Utf8("Zone A".to_string())),
            hash_of(&Value::Utf8("Zone A".to_string()))
        );
    }

    #[test]
    fn value_ordering_is_total_and_deterministic() {
        let mut values = vec![
            Value::Utf8("b".to_string()),
            Value::Float64(f64::NAN),
            Value::Int64(3),
            Value::Null,
            Value::Float64(1.5),
            Value::Bool(true),
            Value::Utf8("a".to_string()),
            Value::Int64(-2),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Int64(-2),
                Value::Int64(3),
                Value::Float64(1.5),
                Value::Float64(f64::NAN),
                Value::Utf8("a".to_string()),
                Value::Utf8("b".to_string()),
            ]
        );
    }

    #[test]
    fn value_display_formats_plainly() {
        assert_eq!(Value::Utf8("Zone A".to_string()).to_string(), "Zone A");
        assert_eq!(Value::Int64(120).to_string(), "120");
        assert_eq!(Value::Float64(98.5).to_string(), "98.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn record_set_filter_preserves_schema_and_input() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("active", DataType::Bool),
        ]);
        let rs = RecordSet::new(
            schema,
            vec![
                vec![Value::Int64(1), Value::Bool(true)],
                vec![Value::Int64(2), Value::Bool(false)],
                vec![Value::Int64(3), Value::Bool(true)],
            ],
        );

        let out = rs.filter_records(|record| matches!(record[1], Value::Bool(true)));
        assert_eq!(out.schema, rs.schema);
        assert_eq!(out.record_count(), 2);
        assert_eq!(out.records[1][0], Value::Int64(3));
        // Original unchanged
        assert_eq!(rs.record_count(), 3);
    }

    #[test]
    #[should_panic(expected = "record 1 length 1 does not match schema length 2")]
    fn record_set_rejects_ragged_records() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("active", DataType::Bool),
        ]);
        let _ = RecordSet::new(
            schema,
            vec![
                vec![Value::Int64(1), Value::Bool(true)],
                vec![Value::Int64(2)],
            ],
        );
    }
}
