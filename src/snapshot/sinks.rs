//! Ready-made [`SnapshotObserver`] implementations.
//!
//! Report binaries that just want save/load outcomes on the terminal use
//! [`StdErrObserver`]; unattended runs that need a trail use [`FileObserver`];
//! [`CompositeObserver`] combines both. Log lines carry the operation verb
//! (`save`/`load`), the snapshot path, and either the record count or the failure
//! severity and error, e.g.:
//!
//! ```text
//! [snapshot] save car_inventory.json: 5 records
//! [snapshot] Critical: load missing.json failed: io error: ...
//! ```

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SnapshotError;

use super::{SnapshotContext, SnapshotObserver, SnapshotSeverity, SnapshotStats};

/// Writes one line per snapshot outcome to stderr, keeping stdout free for the report
/// itself.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl SnapshotObserver for StdErrObserver {
    fn on_success(&self, ctx: &SnapshotContext, stats: SnapshotStats) {
        eprintln!(
            "[snapshot] {} {}: {} records",
            ctx.op.verb(),
            ctx.path.display(),
            stats.records
        );
    }

    fn on_failure(&self, ctx: &SnapshotContext, severity: SnapshotSeverity, error: &SnapshotError) {
        eprintln!(
            "[snapshot] {severity:?}: {} {} failed: {error}",
            ctx.op.verb(),
            ctx.path.display()
        );
    }

    fn on_alert(&self, ctx: &SnapshotContext, severity: SnapshotSeverity, error: &SnapshotError) {
        eprintln!(
            "[snapshot] ALERT {severity:?}: {} {} failed: {error}",
            ctx.op.verb(),
            ctx.path.display()
        );
    }
}

/// Appends one timestamped line per snapshot outcome to a log file.
///
/// Logging never interferes with the snapshot operation it describes: the log file is
/// opened per event, writes are serialized through a mutex, and an unopenable or
/// unwritable log path drops the line rather than failing the save or load.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Log snapshot events by appending to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl SnapshotObserver for FileObserver {
    fn on_success(&self, ctx: &SnapshotContext, stats: SnapshotStats) {
        self.append_line(&format!(
            "{} {} {} records={}",
            unix_ts(),
            ctx.op.verb(),
            ctx.path.display(),
            stats.records
        ));
    }

    fn on_failure(&self, ctx: &SnapshotContext, severity: SnapshotSeverity, error: &SnapshotError) {
        self.append_line(&format!(
            "{} {} {} failed severity={severity:?} err={error}",
            unix_ts(),
            ctx.op.verb(),
            ctx.path.display()
        ));
    }

    fn on_alert(&self, ctx: &SnapshotContext, severity: SnapshotSeverity, error: &SnapshotError) {
        self.append_line(&format!(
            "{} ALERT {} {} severity={severity:?} err={error}",
            unix_ts(),
            ctx.op.verb(),
            ctx.path.display()
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Forwards every callback to a list of observers, in list order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SnapshotObserver>>,
}

impl CompositeObserver {
    /// Fan out to `observers`, first to last.
    pub fn new(observers: Vec<Arc<dyn SnapshotObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SnapshotObserver for CompositeObserver {
    fn on_success(&self, ctx: &SnapshotContext, stats: SnapshotStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &SnapshotContext, severity: SnapshotSeverity, error: &SnapshotError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &SnapshotContext, severity: SnapshotSeverity, error: &SnapshotError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}
