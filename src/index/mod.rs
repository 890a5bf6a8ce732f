//! Route Index Builder.
//!
//! Flattens a resolved tree into lookup tables:
//!
//! ```text
//! path_index     RoutePath  -> NodeId   every routable node
//! content_index  ContentId  -> NodeId   routable nodes with a real content id
//! child_order    NodeId     -> [NodeId] routable children, source order
//! order          [NodeId]               routable nodes, pre-order
//! ```
//!
//! The builder does not decide policy. The caller passes [`Exclusions`]
//! (empty for a clean tree, derived from the report for a partial publish).

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::ValidateConfig;
use crate::core::{ContentId, NodeId, RoutePath};
use crate::tree::NavTree;
use crate::validate::{ValidationReport, Violation};

/// Entries kept out of the published index.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    /// Paths claimed by more than one node: none of the claimants is indexed.
    paths: FxHashSet<RoutePath>,
    /// Content ids carried by more than one node: none is indexed by id.
    content_ids: FxHashSet<ContentId>,
    /// Roots of subtrees that are left out entirely.
    subtrees: FxHashSet<NodeId>,
    /// Placeholder content ids (`<=` this value) are never indexed by id.
    placeholder_id_max: Option<u64>,
}

impl Exclusions {
    /// Nothing excluded except placeholder content ids.
    pub fn none(config: &ValidateConfig) -> Self {
        Self {
            placeholder_id_max: Some(config.placeholder_id_max),
            ..Self::default()
        }
    }

    /// Exclude every entry a report marks as conflicting.
    pub fn from_report(report: &ValidationReport, config: &ValidateConfig) -> Self {
        let mut exclusions = Self::none(config);
        for violation in report {
            match violation {
                Violation::DuplicatePath { path, .. } => {
                    exclusions.paths.insert(path.clone());
                }
                Violation::DuplicateContentId { id, .. } => {
                    exclusions.content_ids.insert(*id);
                }
                Violation::MalformedSegment { node, .. } => {
                    exclusions.subtrees.insert(node.id);
                }
                Violation::Normalization { .. } | Violation::UnaddressableContent { .. } => {}
            }
        }
        exclusions
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.content_ids.is_empty() && self.subtrees.is_empty()
    }

    #[inline]
    fn indexes_content(&self, id: ContentId) -> bool {
        !self.content_ids.contains(&id)
            && self
                .placeholder_id_max
                .is_none_or(|max| id.get() > max)
    }
}

/// Lookup tables over one resolved tree.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    path_index: FxHashMap<RoutePath, NodeId>,
    content_index: FxHashMap<ContentId, NodeId>,
    child_order: FxHashMap<NodeId, Vec<NodeId>>,
    order: Vec<NodeId>,
}

impl RouteIndex {
    /// Assemble the index in one forward pass over the arena.
    pub fn build(tree: &NavTree, exclusions: &Exclusions) -> Self {
        let mut index = Self::default();
        let mut blocked = vec![false; tree.len()];
        let mut routable = vec![false; tree.len()];

        for node in tree.iter() {
            let id = node.id();
            let parent_blocked = node.parent().is_some_and(|p| blocked[p.index()]);
            if parent_blocked || exclusions.subtrees.contains(&id) {
                blocked[id.index()] = true;
                continue;
            }

            let Some(path) = node.resolved_path() else {
                continue;
            };
            if exclusions.paths.contains(path) || index.path_index.contains_key(path) {
                continue;
            }

            index.path_index.insert(path.clone(), id);
            index.order.push(id);
            routable[id.index()] = true;

            if let Some(parent) = node.parent()
                && routable[parent.index()]
            {
                index.child_order.entry(parent).or_default().push(id);
            }

            if let Some(content_id) = node.content_id()
                && exclusions.indexes_content(content_id)
            {
                index.content_index.entry(content_id).or_insert(id);
            }
        }

        crate::debug!(
            "index";
            "{} routes, {} content ids",
            index.path_index.len(), index.content_index.len()
        );

        index
    }

    #[inline]
    pub fn node_for_path(&self, path: &str) -> Option<NodeId> {
        self.path_index.get(path).copied()
    }

    #[inline]
    pub fn node_for_content(&self, id: ContentId) -> Option<NodeId> {
        self.content_index.get(&id).copied()
    }

    /// Routable children of `id`, in source order.
    #[inline]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.child_order.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Check if `id` is published under its resolved path.
    pub fn is_routable(&self, tree: &NavTree, id: NodeId) -> bool {
        tree.get(id)
            .and_then(|node| node.resolved_path())
            .and_then(|path| self.node_for_path(path.as_str()))
            == Some(id)
    }

    /// Routable nodes in pre-order.
    #[inline]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.path_index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path_index.is_empty()
    }

    #[inline]
    pub fn content_len(&self) -> usize {
        self.content_index.len()
    }
}
