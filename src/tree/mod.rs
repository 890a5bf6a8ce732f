//! Node Model and Tree Normalizer.
//!
//! The raw navigation tree arrives as a loosely typed [`serde_json::Value`]:
//! a node may be a nested object, a boolean sentinel, or a bare number.
//! [`normalize`] converts it into a [`NavTree`], an arena of [`Node`]s
//! addressed by [`NodeId`]. Past this point nothing looks at the raw shape.
//!
//! ```text
//! {"Topic A": {"urlPath": "topic-a", "Sub 1": 10}}
//!
//! #0 root
//! └── #1 Topic A   explicit=topic-a
//!     └── #2 Sub 1 content=10
//! ```
//!
//! Node ids follow pre-order, so iterating the arena front to back visits
//! every parent before its children. The resolver and validator rely on
//! this to traverse without recursion.

mod node;
mod normalize;

use std::ops::Index;

use serde::Serialize;

use crate::core::NodeId;
use crate::validate::NodeRef;

pub use node::Node;
pub use normalize::{Normalized, normalize};

/// Separator between names in a diagnostic trail.
const TRAIL_SEPARATOR: &str = " > ";

/// Arena of normalized nodes. Index 0 is the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    nodes: Vec<Node>,
}

impl NavTree {
    /// Create a tree holding only a root node.
    pub fn with_root(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(NodeId::ROOT, name.into(), None, 0)],
        }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Children of `id` in source order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self[id].children().iter().map(|&child| &self[child])
    }

    /// Ancestors of `id` from the root down, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Vec<&Node> {
        let mut chain = Vec::with_capacity(self[id].depth() as usize);
        let mut cursor = self[id].parent();
        while let Some(parent) = cursor {
            let node = &self[parent];
            chain.push(node);
            cursor = node.parent();
        }
        chain.reverse();
        chain
    }

    /// Display-name trail below the root, e.g. `Topic A > Sub 1`.
    ///
    /// The root itself is shown by its own name.
    pub fn trail(&self, id: NodeId) -> String {
        if self[id].is_root() {
            return self[id].name().to_string();
        }
        let mut names: Vec<&str> = self
            .ancestors(id)
            .into_iter()
            .filter(|node| !node.is_root())
            .map(Node::name)
            .collect();
        names.push(self[id].name());
        names.join(TRAIL_SEPARATOR)
    }

    /// Diagnostic handle for a node.
    pub fn node_ref(&self, id: NodeId) -> NodeRef {
        NodeRef {
            id,
            trail: self.trail(id),
        }
    }

    // ------------------------------------------------------------------------
    // pipeline writers
    // ------------------------------------------------------------------------

    /// Append a child under `parent` and return its id.
    pub(crate) fn push(&mut self, parent: NodeId, name: String) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let depth = self[parent].depth() + 1;
        self.nodes.push(Node::new(id, name, Some(parent), depth));
        self.nodes[parent.index()].push_child(id);
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}

impl Index<NodeId> for NavTree {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
