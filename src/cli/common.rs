//! Common utilities shared across CLI commands.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tola_nav::log;
use tola_nav::snapshot::{BuildOutcome, build_from_str, read_source};
use tola_nav::utils::plural_count;
use tola_nav::{NavConfig, Snapshot};

/// Read a tree file and run the full pipeline over it.
pub fn build_file(path: &Path, config: &NavConfig) -> Result<BuildOutcome> {
    let text = read_source(path)?;
    build_from_str(&text, config).with_context(|| format!("failed to load `{}`", path.display()))
}

/// Build a tree file and require a published snapshot.
///
/// A rejected build prints its report and fails; a partial build warns
/// about what was left out.
pub fn published_snapshot(path: &Path, config: &NavConfig) -> Result<Snapshot> {
    match build_file(path, config)? {
        BuildOutcome::Published(snapshot) => {
            let report = snapshot.report();
            if !report.is_clean() {
                log!(
                    "warn";
                    "published with {} omitted: {}",
                    plural_count(report.len(), "conflict"),
                    report.summary()
                );
            }
            Ok(snapshot)
        }
        BuildOutcome::Rejected(report) => {
            report.print();
            bail!("tree rejected: {}", report.summary())
        }
    }
}
