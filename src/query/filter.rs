//! Record filtering by predicate.

use crate::types::{RecordSet, Value};

/// Returns a new [`RecordSet`] containing only records for which `predicate` returns
/// `true`, preserving original relative order.
///
/// This is a convenience wrapper around [`RecordSet::filter_records`]. An empty result
/// is a valid record set, not an error; callers distinguish "no matches" by checking
/// [`RecordSet::record_count`]. Panics raised by the predicate itself propagate; the
/// library does not suppress them.
pub fn filter<F>(records: &RecordSet, predicate: F) -> RecordSet
where
    F: FnMut(&[Value]) -> bool,
{
    records.filter_records(predicate)
}
