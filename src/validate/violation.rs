//! Violation taxonomy collected across the pipeline.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::core::{ContentId, NodeId, RoutePath};

/// Identity of a node for diagnostics: arena id plus its display-name trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    pub id: NodeId,
    /// Display names from the top level down, e.g. `Topic A > Sub 1`.
    pub trail: String,
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.trail)
    }
}

/// A single structural problem in the navigation tree.
///
/// Violations are collected, never thrown: every stage runs to completion
/// and reports all of them together.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A reserved key or leaf value had the wrong type.
    #[error("malformed entry at `{at}`: {reason}")]
    Normalization { at: String, reason: String },

    /// Two or more nodes resolved to the same path.
    #[error("duplicate path `{path}` claimed by {} nodes", .nodes.len())]
    DuplicatePath { path: RoutePath, nodes: Vec<NodeRef> },

    /// Two or more nodes carry the same (non-placeholder) content id.
    #[error("duplicate content id {id} on {} nodes", .nodes.len())]
    DuplicateContentId { id: ContentId, nodes: Vec<NodeRef> },

    /// A node carries a content id but has no resolved path.
    #[error("content id {id} on `{node}` has no resolved path")]
    UnaddressableContent { id: ContentId, node: NodeRef },

    /// A node's segment would escape its ancestor chain or is unusable.
    #[error("malformed segment `{segment}` on `{node}`: {reason}")]
    MalformedSegment {
        node: NodeRef,
        segment: String,
        reason: &'static str,
    },
}

/// Violation category, used for grouping and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    Normalization,
    DuplicatePath,
    DuplicateContentId,
    UnaddressableContent,
    MalformedSegment,
}

impl ViolationKind {
    pub const ALL: [Self; 5] = [
        Self::Normalization,
        Self::DuplicatePath,
        Self::DuplicateContentId,
        Self::UnaddressableContent,
        Self::MalformedSegment,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normalization => "malformed entries",
            Self::DuplicatePath => "duplicate paths",
            Self::DuplicateContentId => "duplicate content ids",
            Self::UnaddressableContent => "unaddressable content",
            Self::MalformedSegment => "malformed segments",
        }
    }
}

impl Violation {
    pub const fn kind(&self) -> ViolationKind {
        match self {
            Self::Normalization { .. } => ViolationKind::Normalization,
            Self::DuplicatePath { .. } => ViolationKind::DuplicatePath,
            Self::DuplicateContentId { .. } => ViolationKind::DuplicateContentId,
            Self::UnaddressableContent { .. } => ViolationKind::UnaddressableContent,
            Self::MalformedSegment { .. } => ViolationKind::MalformedSegment,
        }
    }

    /// Nodes named by this violation (empty for normalization errors, whose
    /// offending entry never became a node).
    pub fn nodes(&self) -> Vec<&NodeRef> {
        match self {
            Self::Normalization { .. } => Vec::new(),
            Self::DuplicatePath { nodes, .. } | Self::DuplicateContentId { nodes, .. } => {
                nodes.iter().collect()
            }
            Self::UnaddressableContent { node, .. } | Self::MalformedSegment { node, .. } => {
                vec![node]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: usize, trail: &str) -> NodeRef {
        NodeRef {
            id: NodeId::new(id),
            trail: trail.to_string(),
        }
    }

    #[test]
    fn test_display() {
        let violation = Violation::DuplicatePath {
            path: RoutePath::new("a/overview"),
            nodes: vec![node(2, "A > Overview"), node(3, "A > overview")],
        };
        assert_eq!(
            violation.to_string(),
            "duplicate path `/a/overview` claimed by 2 nodes"
        );
        assert_eq!(violation.kind(), ViolationKind::DuplicatePath);
        assert_eq!(violation.nodes().len(), 2);
    }

    #[test]
    fn test_serialize_tagged() {
        let violation = Violation::UnaddressableContent {
            id: ContentId(62),
            node: node(4, "Intro"),
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["kind"], "unaddressable_content");
        assert_eq!(json["id"], 62);
        assert_eq!(json["node"]["trail"], "Intro");
    }
}
