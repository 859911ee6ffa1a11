//! Pure query operations over [`crate::types::RecordSet`].
//!
//! All five operations are single-pass, stateless transforms: they take a record set by
//! reference, never mutate it, and either return a complete result or fail fast with a
//! [`crate::QueryError`]. Empty-input cases that are not faults come back as explicit
//! markers (`Option`), never as sentinel numbers.
//!
//! Currently implemented:
//!
//! - [`group_sum()`]: sum a numeric field grouped by a categorical key
//! - [`distinct_values()`]: the set of unique values of a field
//! - [`extremum()`]: the record achieving the max/min of a numeric field
//! - [`filter()`]: the ordered sub-sequence of records matching a predicate
//! - [`summary_stats()`]: count/sum/mean, with optional boolean-partitioned sums
//!
//! ## Example: filter → group → summarize
//!
//! ```rust
//! use tabular_query::query::{filter, group_sum, summary_stats};
//! use tabular_query::types::{DataType, Field, RecordSet, Schema, Value};
//!
//! # fn main() -> Result<(), tabular_query::QueryError> {
//! let schema = Schema::new(vec![
//!     Field::new("zone", DataType::Utf8),
//!     Field::new("type", DataType::Utf8),
//!     Field::new("weight", DataType::Int64),
//! ]);
//! let records = RecordSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("Zone A".to_string()), Value::Utf8("Organic".to_string()), Value::Int64(120)],
//!         vec![Value::Utf8("Zone B".to_string()), Value::Utf8("Plastic".to_string()), Value::Int64(80)],
//!         vec![Value::Utf8("Zone E".to_string()), Value::Utf8("Organic".to_string()), Value::Int64(95)],
//!     ],
//! );
//!
//! // Keep heavy loads only.
//! let weight_idx = records.schema.require("weight")?;
//! let heavy = filter(&records, |record| {
//!     matches!(record[weight_idx], Value::Int64(w) if w >= 90)
//! });
//! assert_eq!(heavy.record_count(), 2);
//!
//! // Group totals come back in first-seen key order.
//! let totals = group_sum(&heavy, "type", "weight")?;
//! assert_eq!(totals.get(&Value::Utf8("Organic".to_string())), Some(&215.0));
//!
//! let stats = summary_stats(&records, "weight", None)?;
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.mean, Some(295.0 / 3.0));
//! # Ok(())
//! # }
//! ```

pub mod distinct;
pub mod extremum;
pub mod filter;
pub mod group;
pub mod stats;

pub use distinct::distinct_values;
pub use extremum::{extremum, Extremum, ExtremumMode};
pub use filter::filter;
pub use group::group_sum;
pub use stats::{summary_stats, PartitionedSums, Summary};
