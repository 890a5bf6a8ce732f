//! The full pipeline, run off to the side of any published snapshot.
//!
//! ```text
//! text ─parse─► Value ─normalize─► NavTree ─resolve─► ─validate─► report
//!                                                                  │
//!                                          policy ◄────────────────┘
//!                                            │
//!                               Rejected ◄───┴───► RouteIndex ─► Snapshot
//! ```

use std::{fs, path::Path, time::Instant};

use serde_json::Value;

use super::Snapshot;
use crate::config::{NavConfig, PublishPolicy};
use crate::error::NavError;
use crate::index::{Exclusions, RouteIndex};
use crate::resolve::resolve_paths;
use crate::tree::{Normalized, normalize};
use crate::utils::hash;
use crate::validate::{ValidationReport, ViolationKind, validate};

/// Result of one pipeline run.
#[derive(Debug)]
pub enum BuildOutcome {
    /// A snapshot ready to publish (possibly with omitted entries under the
    /// partial policy; see [`Snapshot::report`]).
    Published(Snapshot),
    /// The policy refused to publish; every violation is in the report.
    Rejected(ValidationReport),
}

impl BuildOutcome {
    /// The report of the run, whichever way it went.
    pub fn report(&self) -> &ValidationReport {
        match self {
            Self::Published(snapshot) => snapshot.report(),
            Self::Rejected(report) => report,
        }
    }
}

/// Read a source file into memory.
pub fn read_source(path: &Path) -> Result<String, NavError> {
    fs::read_to_string(path).map_err(|err| NavError::Io(path.to_path_buf(), err))
}

/// Parse source text into a raw tree.
pub fn parse_source(text: &str) -> Result<Value, NavError> {
    Ok(serde_json::from_str(text)?)
}

/// Fingerprint of everything a snapshot is derived from.
///
/// Covers the source text and the serialized config, so editing either one
/// forces a rebuild.
pub fn source_fingerprint(text: &str, config: &NavConfig) -> u64 {
    let config_json = serde_json::to_vec(config).unwrap_or_default();
    hash::compute_parts([text.as_bytes(), config_json.as_slice()])
}

/// Parse `text` and run the full pipeline.
pub fn build_from_str(text: &str, config: &NavConfig) -> Result<BuildOutcome, NavError> {
    let fingerprint = source_fingerprint(text, config);
    let raw = parse_source(text)?;
    build_snapshot(&raw, config, Some(fingerprint))
}

/// Run normalize, resolve, validate and index over an in-memory raw tree.
///
/// Only a non-object top-level value fails the run; every problem inside
/// the tree is collected into the report.
pub fn build_snapshot(
    raw: &Value,
    config: &NavConfig,
    fingerprint: Option<u64>,
) -> Result<BuildOutcome, NavError> {
    let start = Instant::now();

    let Normalized {
        mut tree,
        mut violations,
    } = normalize(raw, &config.source)?;
    crate::debug!("pipeline"; "normalized {} nodes in {:?}", tree.len(), start.elapsed());

    resolve_paths(&mut tree, &config.source.base_path(), &config.slug);
    violations.extend(validate(&tree, &config.validate));
    let report = ValidationReport::new(violations);
    crate::debug_do! {
        for kind in ViolationKind::ALL {
            let count = report.count(kind);
            if count > 0 {
                crate::log!("pipeline"; "{count} {}", kind.label());
            }
        }
    }

    let exclusions = match (report.is_clean(), config.validate.policy) {
        (true, _) => Exclusions::none(&config.validate),
        (false, PublishPolicy::Partial) => Exclusions::from_report(&report, &config.validate),
        (false, PublishPolicy::Reject) => {
            crate::debug!("pipeline"; "rejected: {}", report.summary());
            return Ok(BuildOutcome::Rejected(report));
        }
    };

    let index = RouteIndex::build(&tree, &exclusions);
    crate::debug!(
        "pipeline";
        "published {} routes from {} nodes in {:?}",
        index.len(), tree.len(), start.elapsed()
    );

    Ok(BuildOutcome::Published(Snapshot::new(
        tree,
        index,
        report,
        fingerprint,
    )))
}
