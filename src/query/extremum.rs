//! Extremum selection: the record achieving the max or min of a numeric field.

use crate::error::{QueryError, QueryResult};
use crate::types::{RecordSet, Value};

/// Which extreme [`extremum()`] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumMode {
    /// Largest value wins.
    Max,
    /// Smallest value wins.
    Min,
}

/// A record achieving the extreme value of a field.
///
/// Borrows the winning record from the input set rather than copying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum<'a> {
    /// Zero-based position of the winning record in the input set.
    pub index: usize,
    /// The winning record.
    pub record: &'a [Value],
    /// The extreme value, as stored in the record.
    pub value: Value,
}

/// Find the record with the largest (or smallest) value of a numeric field.
///
/// Scans in input order and replaces the current best only on strict improvement, so the
/// first record achieving the extreme value wins ties. That tie-break is part of the
/// contract, not an accident of iteration.
///
/// Empty input returns `Ok(None)`; callers check before use instead of catching an
/// error.
///
/// # Errors
///
/// - [`QueryError::FieldNotFound`] if `value_field` is not in the schema.
/// - [`QueryError::TypeMismatch`] if `value_field` holds a non-numeric value for some
///   record.
pub fn extremum<'a>(
    records: &'a RecordSet,
    value_field: &str,
    mode: ExtremumMode,
) -> QueryResult<Option<Extremum<'a>>> {
    let value_idx = records.schema.require(value_field)?;

    let mut best: Option<(usize, f64)> = None;
    for (idx, record) in records.records.iter().enumerate() {
        let cell = &record[value_idx];
        let n = cell.as_f64().ok_or_else(|| QueryError::TypeMismatch {
            record: idx + 1,
            field: value_field.to_string(),
            expected: "numeric",
            found: cell.type_name(),
        })?;

        // Strict comparison only: equal values never displace the current best.
        let improved = match (&best, mode) {
            (None, _) => true,
            (Some((_, current)), ExtremumMode::Max) => n > *current,
            (Some((_, current)), ExtremumMode::Min) => n < *current,
        };
        if improved {
            best = Some((idx, n));
        }
    }

    Ok(best.map(|(idx, _)| Extremum {
        index: idx,
        record: records.records[idx].as_slice(),
        value: records.records[idx][value_idx].clone(),
    }))
}
