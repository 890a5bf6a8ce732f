//! `check` command: run the pipeline and report every violation.

use std::time::Instant;

use anyhow::{Result, bail};
use tola_nav::config::ValidateLevel;
use tola_nav::log;
use tola_nav::snapshot::BuildOutcome;
use tola_nav::utils::plural_count;
use tola_nav::NavConfig;

use super::CheckArgs;
use super::common::build_file;

/// Check a tree file. Fails on violations unless warnings are allowed.
pub fn run_check(args: &CheckArgs, config: &NavConfig) -> Result<()> {
    let start = Instant::now();
    let outcome = build_file(&args.tree, config)?;
    let report = outcome.report();

    report.print();
    if !report.is_clean() {
        eprintln!();
    }

    match &outcome {
        BuildOutcome::Published(snapshot) => {
            log!(
                "check";
                "resolved {} in {:.1?}",
                plural_count(snapshot.len(), "route"),
                start.elapsed()
            );
        }
        BuildOutcome::Rejected(_) => {
            log!("check"; "nothing published (policy: reject)");
        }
    }

    if report.is_clean() {
        log!("check"; "no violations");
        return Ok(());
    }

    if warnings_allowed(args.warn_only, config.validate.level) {
        log!("check"; "{} (warnings only)", report.summary());
        return Ok(());
    }

    bail!("check failed: {}", report.summary())
}

/// Violations are downgraded by `--warn-only` or `level = "warn"`.
fn warnings_allowed(warn_only: bool, level: ValidateLevel) -> bool {
    warn_only || level == ValidateLevel::Warn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_allowed() {
        assert!(!warnings_allowed(false, ValidateLevel::Error));
        assert!(warnings_allowed(true, ValidateLevel::Error));
        assert!(warnings_allowed(false, ValidateLevel::Warn));
        assert!(warnings_allowed(true, ValidateLevel::Warn));
    }

    #[test]
    fn test_default_config_fails_on_violations() {
        let config = NavConfig::default();
        assert!(!warnings_allowed(false, config.validate.level));
    }
}
