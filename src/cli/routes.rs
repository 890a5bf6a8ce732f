//! `routes` command: print the routing table.

use anyhow::Result;
use owo_colors::OwoColorize;
use tola_nav::log;
use tola_nav::utils::plural_count;
use tola_nav::{NavConfig, Snapshot};

use super::RoutesArgs;
use super::common::published_snapshot;

pub fn run_routes(args: &RoutesArgs, config: &NavConfig) -> Result<()> {
    let snapshot = published_snapshot(&args.tree, config)?;

    if args.json {
        let entries = snapshot.entries();
        let formatted = if args.pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };
        println!("{formatted}");
        return Ok(());
    }

    print_table(&snapshot);
    log!("routes"; "{}", plural_count(snapshot.len(), "route"));
    Ok(())
}

/// One line per route: path, content id (or `-`), display name.
fn print_table(snapshot: &Snapshot) {
    let width = snapshot
        .routes()
        .map(|(path, _)| path.as_str().chars().count() + 1)
        .max()
        .unwrap_or(1);

    for (path, node) in snapshot.routes() {
        let id = node
            .content_id()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "{:<width$}  {}  {}",
            path.to_string(),
            format!("{id:>6}").dimmed(),
            node.name()
        );
    }
}
