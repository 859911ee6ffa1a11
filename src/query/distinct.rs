//! Distinct value collection.

use std::collections::HashSet;

use crate::error::QueryResult;
use crate::types::{RecordSet, Value};

/// Collect the set of distinct values of a field across all records.
///
/// The result is unordered; callers that need deterministic display sort it explicitly
/// ([`Value`] has a total ordering for exactly that). Equality is value equality, so
/// `NaN` deduplicates with `NaN` and `0.0` with `-0.0`.
///
/// # Errors
///
/// [`crate::QueryError::FieldNotFound`] if the field is not in the schema.
pub fn distinct_values(records: &RecordSet, field: &str) -> QueryResult<HashSet<Value>> {
    let idx = records.schema.require(field)?;

    let mut values = HashSet::new();
    for record in &records.records {
        values.insert(record[idx].clone());
    }

    Ok(values)
}
