//! Integrity Validator.
//!
//! One forward pass over the resolved tree collects every violation:
//!
//! | Check                  | Violation                |
//! |------------------------|--------------------------|
//! | bad segment            | `MalformedSegment`       |
//! | content id, no path    | `UnaddressableContent`   |
//! | path claimed twice     | `DuplicatePath`          |
//! | content id used twice  | `DuplicateContentId`     |
//!
//! The validator never decides what to publish; it only reports. See
//! [`crate::index`] for how a report is turned into exclusions.

mod report;
mod violation;

pub use report::ValidationReport;
pub use violation::{NodeRef, Violation, ViolationKind};

use rustc_hash::FxHashMap;

use crate::config::ValidateConfig;
use crate::core::{ContentId, NodeId, RoutePath, segment_defect};
use crate::tree::NavTree;

/// Path -> nodes claiming it.
type PathClaims<'a> = FxHashMap<&'a RoutePath, Vec<NodeId>>;
/// Content id -> nodes carrying it.
type ContentClaims = FxHashMap<ContentId, Vec<NodeId>>;

/// Check every invariant of a resolved tree.
pub fn validate(tree: &NavTree, config: &ValidateConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut tainted = vec![false; tree.len()];
    let mut path_claims = PathClaims::default();
    let mut content_claims = ContentClaims::default();

    for node in tree.iter() {
        let id = node.id();

        if let Some(parent) = node.parent() {
            tainted[id.index()] = tainted[parent.index()];

            if let Some(segment) = node.segment()
                && let Some(reason) = segment_defect(segment)
            {
                tainted[id.index()] = true;
                violations.push(Violation::MalformedSegment {
                    node: tree.node_ref(id),
                    segment: segment.to_string(),
                    reason,
                });
            }
        }

        if let Some(path) = node.resolved_path() {
            path_claims.entry(path).or_default().push(id);
        }

        if let Some(content_id) = node.content_id() {
            // Malformed ancestry already explains the missing path.
            if node.resolved_path().is_none() && !tainted[id.index()] {
                violations.push(Violation::UnaddressableContent {
                    id: content_id,
                    node: tree.node_ref(id),
                });
            }
            if !config.is_placeholder_id(content_id) {
                content_claims.entry(content_id).or_default().push(id);
            }
        }
    }

    violations.extend(duplicate_paths(tree, path_claims));
    violations.extend(duplicate_content_ids(tree, content_claims));

    crate::debug!("validate"; "{} nodes checked, {} violations", tree.len(), violations.len());

    violations
}

/// Paths claimed by more than one node, in order of first claim.
fn duplicate_paths(tree: &NavTree, claims: PathClaims<'_>) -> Vec<Violation> {
    let mut conflicts: Vec<_> = claims
        .into_iter()
        .filter(|(_, nodes)| nodes.len() > 1)
        .collect();
    conflicts.sort_by_key(|(_, nodes)| nodes[0]);

    conflicts
        .into_iter()
        .map(|(path, nodes)| Violation::DuplicatePath {
            path: path.clone(),
            nodes: nodes.into_iter().map(|id| tree.node_ref(id)).collect(),
        })
        .collect()
}

/// Content ids carried by more than one node, in order of first use.
fn duplicate_content_ids(tree: &NavTree, claims: ContentClaims) -> Vec<Violation> {
    let mut conflicts: Vec<_> = claims
        .into_iter()
        .filter(|(_, nodes)| nodes.len() > 1)
        .collect();
    conflicts.sort_by_key(|(_, nodes)| nodes[0]);

    conflicts
        .into_iter()
        .map(|(id, nodes)| Violation::DuplicateContentId {
            id,
            nodes: nodes.into_iter().map(|node| tree.node_ref(node)).collect(),
        })
        .collect()
}
