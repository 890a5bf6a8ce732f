//! `watch` command: rebuild and swap the snapshot on every change.
//!
//! The directory holding the tree file is watched rather than the file
//! itself, since editors commonly save by writing a temp file and renaming
//! it over the original.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossbeam::channel;
use notify::{EventKind, RecursiveMode, Watcher};
use tola_nav::logger::{status_error, status_success, status_unchanged, status_warning};
use tola_nav::utils::plural_count;
use tola_nav::{NavConfig, NavStore, RebuildOutcome, log};

use super::WatchArgs;

/// Quiet period after the last event before rebuilding.
const DEBOUNCE_MS: u64 = 300;
/// Receive timeout while nothing is pending.
const IDLE_MS: u64 = 60_000;

pub fn run_watch(args: &WatchArgs, config: &NavConfig) -> Result<()> {
    let tree = args.tree.as_path();
    let store = NavStore::new();

    // Start watching before the initial build so no edit is missed.
    let (tx, rx) = channel::unbounded();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;
    let dir = watch_dir(tree);
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch `{}`", dir.display()))?;

    let (stop_tx, stop_rx) = channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.try_send(());
    })?;

    log!("watch"; "watching {}", tree.display());
    rebuild(&store, tree, config);

    let mut last_event: Option<Instant> = None;
    'watch: loop {
        let timeout = last_event.map_or(Duration::from_millis(IDLE_MS), |at| {
            Duration::from_millis(DEBOUNCE_MS)
                .saturating_sub(at.elapsed())
                .max(Duration::from_millis(1))
        });

        channel::select! {
            recv(stop_rx) -> _ => break 'watch,
            recv(rx) -> message => match message {
                Ok(Ok(event)) => {
                    if is_relevant(&event, tree) {
                        tola_nav::debug!("watch"; "{:?} {:?}", event.kind, event.paths);
                        last_event = Some(Instant::now());
                    }
                }
                Ok(Err(err)) => log!("watch"; "watcher error: {err}"),
                Err(_) => break 'watch,
            },
            default(timeout) => {
                if last_event.is_some_and(|at| at.elapsed() >= Duration::from_millis(DEBOUNCE_MS)) {
                    last_event = None;
                    rebuild(&store, tree, config);
                }
            }
        }
    }

    log!("watch"; "stopped");
    Ok(())
}

/// Rebuild from disk and report the outcome on the status line.
fn rebuild(store: &NavStore, tree: &Path, config: &NavConfig) {
    match store.rebuild_file(tree, config) {
        Ok(RebuildOutcome::Published(snapshot)) => {
            let routes = plural_count(snapshot.len(), "route");
            let report = snapshot.report();
            if report.is_clean() {
                status_success(&format!("published {routes}"));
            } else {
                status_warning(&format!(
                    "published {routes}, omitted {}\n{}",
                    report.summary(),
                    report.format()
                ));
            }
        }
        Ok(RebuildOutcome::Unchanged) => status_unchanged("no changes"),
        Ok(RebuildOutcome::Rejected(report)) => {
            status_error(
                &format!("rejected ({}), keeping previous routes", report.summary()),
                &report.format(),
            );
        }
        Err(err) => {
            let detail = std::error::Error::source(&err)
                .map(ToString::to_string)
                .unwrap_or_default();
            status_error(&err.to_string(), &detail);
        }
    }
}

fn watch_dir(tree: &Path) -> &Path {
    tree.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

/// Content changes to the tree file; metadata-only changes are ignored.
fn is_relevant(event: &notify::Event, tree: &Path) -> bool {
    let content_change = match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(modify) => !matches!(modify, notify::event::ModifyKind::Metadata(_)),
        _ => false,
    };
    content_change
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == tree.file_name())
}
