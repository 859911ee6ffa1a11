use thiserror::Error;

/// Convenience result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type returned by the query operations.
///
/// Query operations are pure: they either return a complete result or fail fast with one
/// of these kinds. Nothing is ever skipped silently and no partial result is returned.
/// Record numbers in messages are 1-based.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A named field is missing from the record set's schema.
    #[error("field not found: '{field}'")]
    FieldNotFound { field: String },

    /// A field is present but holds a value the operation cannot use.
    #[error("type mismatch at record {record} field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        record: usize,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Convenience result type for snapshot persistence.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Error type returned by the snapshot collaborator.
///
/// Persistence faults live in their own enum so the query operations can never surface
/// an I/O error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot text does not have the canonical shape (a json array of objects
    /// covering every schema field).
    #[error("malformed snapshot: {message}")]
    Malformed { message: String },

    /// A cell could not be converted to or from the schema's type.
    #[error("failed to convert value at record {record} field '{field}': {message} (raw='{raw}')")]
    Value {
        record: usize,
        field: String,
        raw: String,
        message: String,
    },
}
