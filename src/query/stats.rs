//! Summary statistics over a numeric field.

use serde::Serialize;

use crate::error::{QueryError, QueryResult};
use crate::types::RecordSet;

/// Per-partition counts and sums produced when a boolean partition field is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PartitionedSums {
    /// Records whose partition field is `true`.
    pub count_where_true: usize,
    /// Records whose partition field is `false`.
    pub count_where_false: usize,
    /// Sum of the value field where the partition field is `true`.
    pub sum_where_true: f64,
    /// Sum of the value field where the partition field is `false`.
    pub sum_where_false: f64,
}

/// Count, sum, and mean of a numeric field, with optional boolean-partitioned sums.
///
/// Serializes with `mean` as JSON `null` on empty input, never `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of records.
    pub count: usize,
    /// Sum of the value field over all records.
    pub sum: f64,
    /// Arithmetic mean; `None` on an empty record set. A zero mean of real records is
    /// `Some(0.0)`, so callers can tell the two apart.
    pub mean: Option<f64>,
    /// Present only when a partition field was supplied.
    pub partition: Option<PartitionedSums>,
}

impl Summary {
    /// Share of records in the false partition, as a percentage of all records.
    ///
    /// For a seat table partitioned on availability this is the occupancy rate:
    /// reserved seats / all seats * 100. Returns `None` when no partition field was
    /// supplied or the record set is empty.
    pub fn rate_where_false(&self) -> Option<f64> {
        let partition = self.partition?;
        if self.count == 0 {
            return None;
        }
        Some(partition.count_where_false as f64 / self.count as f64 * 100.0)
    }
}

/// Compute count, sum, and mean of `value_field`, optionally partitioned by a boolean
/// field.
///
/// When `partition_field` is given it must be boolean-typed; per-partition counts and
/// sums are then reported alongside the totals. The mean of an empty record set is the
/// explicit `None` marker, never a division fault or `NaN`.
///
/// # Errors
///
/// - [`QueryError::FieldNotFound`] if either field name is not in the schema.
/// - [`QueryError::TypeMismatch`] if `value_field` holds a non-numeric value or
///   `partition_field` holds a non-boolean value for some record.
pub fn summary_stats(
    records: &RecordSet,
    value_field: &str,
    partition_field: Option<&str>,
) -> QueryResult<Summary> {
    let value_idx = records.schema.require(value_field)?;
    let partition_idx = match partition_field {
        Some(name) => Some((name, records.schema.require(name)?)),
        None => None,
    };

    let mut count = 0usize;
    let mut sum = 0.0f64;
    let mut partition = partition_idx.map(|_| PartitionedSums::default());

    for (idx, record) in records.records.iter().enumerate() {
        let cell = &record[value_idx];
        let n = cell.as_f64().ok_or_else(|| QueryError::TypeMismatch {
            record: idx + 1,
            field: value_field.to_string(),
            expected: "numeric",
            found: cell.type_name(),
        })?;
        count += 1;
        sum += n;

        if let (Some((name, pidx)), Some(parts)) = (partition_idx, partition.as_mut()) {
            let cell = &record[pidx];
            let flag = cell.as_bool().ok_or_else(|| QueryError::TypeMismatch {
                record: idx + 1,
                field: name.to_string(),
                expected: "bool",
                found: cell.type_name(),
            })?;
            if flag {
                parts.count_where_true += 1;
                parts.sum_where_true += n;
            } else {
                parts.count_where_false += 1;
                parts.sum_where_false += n;
            }
        }
    }

    let mean = if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    };

    Ok(Summary {
        count,
        sum,
        mean,
        partition,
    })
}
