//! Path Resolver - assigns every node its canonical route path.
//!
//! ```text
//! resolved(root)  = base
//! resolved(node)  = resolved(parent) / segment(node)
//! segment(node)   = explicit path, verbatim
//!                 | slugify(name)
//! ```
//!
//! A node whose segment fails [`segment_defect`] gets no path, and neither
//! does anything below it.
//!
//! Collisions are *not* disambiguated here; two nodes deriving the same path
//! both keep it and the validator reports the pair.

mod slug;

pub use slug::slugify;

use crate::config::SlugConfig;
use crate::core::{NodeId, RoutePath, segment_defect};
use crate::tree::NavTree;

/// Counters from one resolver pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Nodes that received a resolved path.
    pub assigned: usize,
    /// Placeholders left without a path.
    pub placeholders: usize,
    /// Nodes whose segment or ancestor chain made a path impossible.
    pub unresolved: usize,
}

/// Assign `segment` and `resolved_path` to every node, root first.
///
/// Arena order is pre-order, so a single forward pass always sees a parent's
/// path before any of its children.
pub fn resolve_paths(tree: &mut NavTree, base: &RoutePath, slug: &SlugConfig) -> ResolveStats {
    let mut stats = ResolveStats::default();

    for index in 0..tree.len() {
        let id = NodeId::new(index);
        let node = &tree[id];

        let Some(parent) = node.parent() else {
            tree.node_mut(id).assign_path(None, Some(base.clone()));
            stats.assigned += 1;
            continue;
        };

        if node.is_placeholder() {
            stats.placeholders += 1;
            continue;
        }

        let segment = match node.explicit_path() {
            Some(explicit) => explicit.to_string(),
            None => slugify(node.name(), slug),
        };

        // A defective segment would escape or alias another subtree.
        let path = match tree[parent].resolved_path() {
            Some(parent_path) if segment_defect(&segment).is_none() => {
                Some(parent_path.join(&segment))
            }
            _ => None,
        };

        if path.is_some() {
            stats.assigned += 1;
        } else {
            stats.unresolved += 1;
        }
        tree.node_mut(id).assign_path(Some(segment), path);
    }

    crate::debug!(
        "resolve";
        "{} paths assigned, {} placeholders, {} unresolved",
        stats.assigned, stats.placeholders, stats.unresolved
    );

    stats
}
