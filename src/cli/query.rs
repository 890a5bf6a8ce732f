//! `query` command: look up one node and its neighbourhood.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde_json::{Map, Value as JsonValue};
use tola_nav::{ContentId, NavConfig, Node, RouteEntry, Snapshot};

use super::QueryArgs;
use super::common::published_snapshot;

pub fn run_query(args: &QueryArgs, config: &NavConfig) -> Result<()> {
    let snapshot = published_snapshot(&args.tree, config)?;
    let node = find(&snapshot, args)?;
    // Only nodes with a resolved path are ever returned by lookups.
    let path = node
        .resolved_path()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default();

    let breadcrumbs = args
        .breadcrumbs
        .then(|| snapshot.breadcrumbs(&path).unwrap_or_default());
    let children = args
        .children
        .then(|| snapshot.children(&path).unwrap_or_default());
    let siblings = args
        .siblings
        .then(|| snapshot.siblings(&path).unwrap_or_default());

    if args.json {
        let mut obj = Map::new();
        obj.insert("node".to_string(), entry_json(node));
        for (key, nodes) in [
            ("breadcrumbs", &breadcrumbs),
            ("children", &children),
            ("siblings", &siblings),
        ] {
            if let Some(nodes) = nodes {
                let list = nodes.iter().map(|n| entry_json(n)).collect();
                obj.insert(key.to_string(), JsonValue::Array(list));
            }
        }
        println!("{}", serde_json::to_string_pretty(&JsonValue::Object(obj))?);
        return Ok(());
    }

    print_node(&snapshot, node);
    if let Some(nodes) = &breadcrumbs {
        let trail: Vec<_> = nodes.iter().map(|n| n.name()).collect();
        println!("{:>12}  {}", "breadcrumbs".bold(), trail.join(" > "));
    }
    if let Some(nodes) = &children {
        print_list("children", nodes, node);
    }
    if let Some(nodes) = &siblings {
        print_list("siblings", nodes, node);
    }
    Ok(())
}

fn find<'a>(snapshot: &'a Snapshot, args: &QueryArgs) -> Result<&'a Node> {
    if let Some(path) = &args.path {
        return match snapshot.resolve(path) {
            Some(node) => Ok(node),
            None => bail!("no route at `{path}`"),
        };
    }
    if let Some(id) = args.content_id {
        return match snapshot.by_content_id(ContentId(id)) {
            Some(node) => Ok(node),
            None => bail!("no route carries content id {id}"),
        };
    }
    bail!("either --path or --content-id is required")
}

fn entry_json(node: &Node) -> JsonValue {
    RouteEntry::of(node)
        .and_then(|entry| serde_json::to_value(entry).ok())
        .unwrap_or(JsonValue::Null)
}

fn print_node(snapshot: &Snapshot, node: &Node) {
    let path = node.resolved_path().map(ToString::to_string).unwrap_or_default();
    let content = node
        .content_id()
        .map_or_else(|| "-".to_string(), |id| id.to_string());

    println!("{:>12}  {}", "path".bold(), path);
    println!("{:>12}  {}", "name".bold(), node.name());
    println!("{:>12}  {}", "content id".bold(), content);
    println!("{:>12}  {}", "node".bold(), snapshot.tree().trail(node.id()).dimmed());
}

/// Print sibling/child rows, marking the queried node.
fn print_list(label: &str, nodes: &[&Node], current: &Node) {
    println!("{:>12}", label.bold());
    if nodes.is_empty() {
        println!("{:>12}  {}", "", "(none)".dimmed());
    }
    for node in nodes {
        let path = node.resolved_path().map(ToString::to_string).unwrap_or_default();
        let marker = if node.id() == current.id() { "*" } else { " " };
        println!("{:>12}{marker} {}  {}", "", path, node.name().dimmed());
    }
}
