//! Grouped sums over a record set.

use indexmap::IndexMap;

use crate::error::{QueryError, QueryResult};
use crate::types::{RecordSet, Value};

/// Sum a numeric field grouped by a categorical key.
///
/// Scans records in input order, creating a zero-initialized bucket the first time a key
/// is seen and accumulating into it afterwards. The returned map iterates buckets in
/// first-seen key order. No record is ever dropped: a record the operation cannot use
/// fails the whole call.
///
/// # Errors
///
/// - [`QueryError::FieldNotFound`] if `key_field` or `value_field` is not in the schema.
/// - [`QueryError::TypeMismatch`] if `value_field` holds a non-numeric value for some
///   record.
pub fn group_sum(
    records: &RecordSet,
    key_field: &str,
    value_field: &str,
) -> QueryResult<IndexMap<Value, f64>> {
    let key_idx = records.schema.require(key_field)?;
    let value_idx = records.schema.require(value_field)?;

    let mut totals: IndexMap<Value, f64> = IndexMap::new();
    for (idx, record) in records.records.iter().enumerate() {
        let cell = &record[value_idx];
        let n = cell.as_f64().ok_or_else(|| QueryError::TypeMismatch {
            record: idx + 1,
            field: value_field.to_string(),
            expected: "numeric",
            found: cell.type_name(),
        })?;
        *totals.entry(record[key_idx].clone()).or_insert(0.0) += n;
    }

    Ok(totals)
}
