//! `tabular-query` is a small library of pure query operations over typed, in-memory
//! record sets, using a user-provided [`types::Schema`].
//!
//! The primary surface is the [`query`] module: five single-pass, side-effect-free
//! operations that cover the aggregation/filter/selection needs of small tabular
//! reports. Every operation takes a [`types::RecordSet`] by reference and never mutates
//! it; record sets are immutable snapshots constructed once and consumed read-only.
//!
//! ## Operations (the core)
//!
//! - [`query::group_sum`]: sum a numeric field grouped by a categorical key, buckets in
//!   first-seen key order
//! - [`query::distinct_values`]: the set of unique values of a field
//! - [`query::extremum`]: the record achieving the max/min of a numeric field, with
//!   first-occurrence tie-break
//! - [`query::filter`]: the ordered sub-sequence of records matching a predicate
//! - [`query::summary_stats`]: count/sum/mean plus optional boolean-partitioned sums
//!
//! **Schema + value types:**
//!
//! Record sets hold typed [`types::Value`]s matching a user-provided [`types::Schema`].
//! Supported logical types are:
//!
//! - [`types::DataType::Int64`]
//! - [`types::DataType::Float64`]
//! - [`types::DataType::Bool`]
//! - [`types::DataType::Utf8`]
//!
//! JSON `null` maps to [`types::Value::Null`]. Null is an ordinary value as a group key
//! or distinct element, but a [`QueryError::TypeMismatch`] where a number or boolean is
//! required: nothing is ever skipped silently.
//!
//! ## Quick example: query a record set
//!
//! ```rust
//! use tabular_query::query::{extremum, group_sum, summary_stats, ExtremumMode};
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
//!         vec![Value::Utf8("Zone A".into()), Value::Utf8("Organic".into()), Value::Int64(120)],
//!         vec![Value::Utf8("Zone B".into()), Value::Utf8("Plastic".into()), Value::Int64(80)],
//!         vec![Value::Utf8("Zone E".into()), Value::Utf8("Organic".into()), Value::Int64(95)],
//!     ],
//! );
//!
//! let totals = group_sum(&records, "type", "weight")?;
//! assert_eq!(totals.get(&Value::Utf8("Organic".into())), Some(&215.0));
//!
//! let heaviest = extremum(&records, "weight", ExtremumMode::Max)?.unwrap();
//! assert_eq!(heaviest.record[0], Value::Utf8("Zone A".into()));
//!
//! let stats = summary_stats(&records, "weight", None)?;
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.sum, 295.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Snapshots (harness persistence)
//!
//! The [`snapshot`] module serializes a record set to a JSON file (array of objects,
//! fields in schema order, 4-space indentation) and loads it back, reproducing an
//! equivalent record set. Save/load outcomes can be reported to a
//! [`snapshot::SnapshotObserver`]:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tabular_query::snapshot::{
//!     load_snapshot, save_snapshot, SnapshotOptions, StdErrObserver,
//! };
//! use tabular_query::types::{DataType, Field, RecordSet, Schema, Value};
//!
//! # fn main() -> Result<(), tabular_query::SnapshotError> {
//! let schema = Schema::new(vec![
//!     Field::new("id", DataType::Int64),
//!     Field::new("model", DataType::Utf8),
//! ]);
//! let records = RecordSet::new(
//!     schema,
//!     vec![vec![Value::Int64(2), Value::Utf8("Civic".into())]],
//! );
//!
//! let opts = SnapshotOptions {
//!     observer: Some(Arc::new(StdErrObserver)),
//!     ..Default::default()
//! };
//! save_snapshot(&records, "inventory.json", &opts)?;
//! let reloaded = load_snapshot("inventory.json", &records.schema, &opts)?;
//! assert_eq!(reloaded, records);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`query`]: the five query operations
//! - [`types`]: schema + in-memory record set types
//! - [`snapshot`]: JSON snapshot persistence and its observers
//! - [`report`]: plain-text table rendering
//! - [`error`]: error types, split so that query operations can never raise I/O faults
//!
//! ## Empty input
//!
//! Empty record sets are valid input everywhere and never a fault: [`query::extremum`]
//! returns `Ok(None)`, [`query::summary_stats`] reports a count of zero with the mean
//! marked undefined (`None`, never `NaN`), and [`query::filter`] with no matches returns
//! an empty record set that callers distinguish by length.

pub mod error;
pub mod query;
pub mod report;
pub mod snapshot;
pub mod types;

pub use error::{QueryError, QueryResult, SnapshotError, SnapshotResult};
