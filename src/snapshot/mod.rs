//! Snapshot persistence for record sets.
//!
//! The snapshot collaborator is the harness-side persistence layer: it serializes a
//! [`crate::types::RecordSet`] to a structured text file and reads it back. The
//! canonical encoding is a JSON array of objects, fields in schema order, indented with
//! four spaces, so that re-loading a saved snapshot reproduces an equivalent record set
//! field for field.
//!
//! - [`save_snapshot`] / [`load_snapshot`]: path-based entry points. If a
//!   [`SnapshotObserver`] is configured in [`SnapshotOptions`], success/failure/alerts
//!   are reported to it.
//! - [`json::encode_snapshot`] / [`json::decode_snapshot`]: the underlying text codec,
//!   for callers that manage I/O themselves.
//! - [`sinks`]: ready-made observers (stderr, append-to-file, fan-out).
//!
//! The query operations in [`crate::query`] never touch this module; I/O faults can only
//! originate here.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{SnapshotError, SnapshotResult};
use crate::types::{RecordSet, Schema};

pub mod json;
pub mod sinks;

pub use json::{decode_snapshot, encode_snapshot};
pub use sinks::{CompositeObserver, FileObserver, StdErrObserver};

/// Which snapshot operation an observer callback refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOp {
    /// Writing a record set to disk.
    Save,
    /// Reading a record set from disk.
    Load,
}

impl SnapshotOp {
    /// Lowercase verb for log lines.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Load => "load",
        }
    }
}

/// How bad a snapshot failure is, from an operator's point of view.
///
/// [`severity_for_error`] assigns one to every [`SnapshotError`]: I/O faults are
/// `Critical` (the file could not be touched at all), everything else — invalid JSON, a
/// non-canonical shape, a cell that does not match the schema — is `Error` (the file was
/// read but its content is bad). The ordering drives the
/// [`SnapshotOptions::alert_at_or_above`] threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnapshotSeverity {
    /// Informational.
    Info,
    /// Suspicious but non-fatal.
    Warning,
    /// The operation failed; the snapshot content is at fault.
    Error,
    /// The operation failed before content was even in play (I/O).
    Critical,
}

/// What a [`SnapshotObserver`] callback is about: which file, and whether the attempt
/// was a save or a load.
#[derive(Debug, Clone)]
pub struct SnapshotContext {
    /// The snapshot file path.
    pub path: PathBuf,
    /// Whether the attempt was a save or a load.
    pub op: SnapshotOp,
}

/// Outcome numbers reported on a successful save or load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotStats {
    /// Number of records written or read.
    pub records: usize,
}

/// Receives the outcome of every [`save_snapshot`] / [`load_snapshot`] call that carries
/// an observer.
///
/// All callbacks default to no-ops except [`Self::on_alert`], which forwards to
/// [`Self::on_failure`], so an implementor that does not care about thresholds only
/// writes the two outcome hooks. See [`sinks`] for ready-made implementations.
pub trait SnapshotObserver: Send + Sync {
    /// A save or load completed.
    fn on_success(&self, _ctx: &SnapshotContext, _stats: SnapshotStats) {}

    /// A save or load failed with the given severity.
    fn on_failure(&self, _ctx: &SnapshotContext, _severity: SnapshotSeverity, _error: &SnapshotError) {}

    /// A failure at or above [`SnapshotOptions::alert_at_or_above`]. Fired in addition
    /// to [`Self::on_failure`], never instead of it.
    fn on_alert(&self, ctx: &SnapshotContext, severity: SnapshotSeverity, error: &SnapshotError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Options controlling snapshot save/load behavior.
///
/// Use [`Default`] for common cases (no observer, alert at Critical).
#[derive(Clone)]
pub struct SnapshotOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn SnapshotObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: SnapshotSeverity,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: SnapshotSeverity::Critical,
        }
    }
}

impl fmt::Debug for SnapshotOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Write a record set to `path` in the canonical snapshot encoding.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with record count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Errors
///
/// [`SnapshotError::Value`] if a cell has no JSON representation,
/// [`SnapshotError::Io`] if the file cannot be written.
pub fn save_snapshot(
    records: &RecordSet,
    path: impl AsRef<Path>,
    options: &SnapshotOptions,
) -> SnapshotResult<()> {
    let path = path.as_ref();
    let ctx = SnapshotContext {
        path: path.to_path_buf(),
        op: SnapshotOp::Save,
    };

    let result = encode_snapshot(records)
        .and_then(|text| std::fs::write(path, text).map_err(SnapshotError::from));

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(()) => obs.on_success(
                &ctx,
                SnapshotStats {
                    records: records.record_count(),
                },
            ),
            Err(e) => report_failure(obs, &ctx, e, options),
        }
    }

    result
}

/// Read a record set from `path`, shaping it with `schema`.
///
/// Observer reporting matches [`save_snapshot`].
///
/// # Errors
///
/// [`SnapshotError::Io`] if the file cannot be read; [`SnapshotError::Json`],
/// [`SnapshotError::Malformed`], or [`SnapshotError::Value`] if its content is not a
/// well-formed snapshot for `schema`.
pub fn load_snapshot(
    path: impl AsRef<Path>,
    schema: &Schema,
    options: &SnapshotOptions,
) -> SnapshotResult<RecordSet> {
    let path = path.as_ref();
    let ctx = SnapshotContext {
        path: path.to_path_buf(),
        op: SnapshotOp::Load,
    };

    let result = std::fs::read_to_string(path)
        .map_err(SnapshotError::from)
        .and_then(|text| decode_snapshot(&text, schema));

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(rs) => obs.on_success(
                &ctx,
                SnapshotStats {
                    records: rs.record_count(),
                },
            ),
            Err(e) => report_failure(obs, &ctx, e, options),
        }
    }

    result
}

fn report_failure(
    obs: &Arc<dyn SnapshotObserver>,
    ctx: &SnapshotContext,
    error: &SnapshotError,
    options: &SnapshotOptions,
) {
    let sev = severity_for_error(error);
    obs.on_failure(ctx, sev, error);
    if sev >= options.alert_at_or_above {
        obs.on_alert(ctx, sev, error);
    }
}

/// Severity assigned to a snapshot failure; see [`SnapshotSeverity`].
pub fn severity_for_error(e: &SnapshotError) -> SnapshotSeverity {
    match e {
        SnapshotError::Io(_) => SnapshotSeverity::Critical,
        SnapshotError::Json(_) | SnapshotError::Malformed { .. } | SnapshotError::Value { .. } => {
            SnapshotSeverity::Error
        }
    }
}
