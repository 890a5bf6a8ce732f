//! Atomic snapshot publishing.
//!
//! Uses `arc-swap` for lock-free reads and atomic replacement. Readers call
//! [`NavStore::load`] and keep the returned `Arc` for as long as they need a
//! consistent view; a concurrent rebuild never affects it.

use std::{path::Path, sync::Arc};

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use super::{BuildOutcome, Snapshot, build_snapshot, parse_source, read_source, source_fingerprint};
use crate::config::NavConfig;
use crate::error::NavError;
use crate::utils::hash;
use crate::validate::ValidationReport;

/// What a rebuild did to the published snapshot.
#[derive(Debug)]
pub enum RebuildOutcome {
    /// Source and config match the published snapshot; nothing was rebuilt.
    Unchanged,
    /// A new snapshot is now published.
    Published(Arc<Snapshot>),
    /// The policy refused the build; the previous snapshot stays published.
    Rejected(ValidationReport),
}

/// Holder of the currently published snapshot.
pub struct NavStore {
    current: ArcSwap<Snapshot>,
    /// Serializes writers so the fingerprint check and the swap stay paired.
    rebuild_lock: Mutex<()>,
}

impl NavStore {
    /// Start with an empty snapshot.
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot::empty())
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            current: ArcSwap::from_pointee(snapshot),
            rebuild_lock: Mutex::new(()),
        }
    }

    /// The snapshot published right now.
    #[inline]
    pub fn load(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Replace the published snapshot.
    pub fn publish(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let _guard = self.rebuild_lock.lock();
        self.store(snapshot)
    }

    /// Rebuild from source text and publish the result if the policy allows.
    ///
    /// Returns `Unchanged` without running the pipeline when the source and
    /// config fingerprint matches the published snapshot.
    pub fn rebuild(&self, source: &str, config: &NavConfig) -> Result<RebuildOutcome, NavError> {
        let _guard = self.rebuild_lock.lock();

        let fingerprint = source_fingerprint(source, config);
        if self.current.load().fingerprint() == Some(fingerprint) {
            crate::debug!("store"; "fingerprint unchanged, skipping rebuild");
            return Ok(RebuildOutcome::Unchanged);
        }

        let raw = parse_source(source)?;
        Ok(match build_snapshot(&raw, config, Some(fingerprint))? {
            BuildOutcome::Published(snapshot) => RebuildOutcome::Published(self.store(snapshot)),
            BuildOutcome::Rejected(report) => RebuildOutcome::Rejected(report),
        })
    }

    /// Read `path` and [`rebuild`](Self::rebuild) from its contents.
    pub fn rebuild_file(&self, path: &Path, config: &NavConfig) -> Result<RebuildOutcome, NavError> {
        let source = read_source(path)?;
        self.rebuild(&source, config)
    }

    fn store(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        if let Some(fingerprint) = snapshot.fingerprint() {
            crate::debug!("store"; "publishing snapshot {}", hash::short_hex(fingerprint));
        }
        let snapshot = Arc::new(snapshot);
        self.current.store(Arc::clone(&snapshot));
        snapshot
    }
}

impl Default for NavStore {
    fn default() -> Self {
        Self::new()
    }
}
