//! Normalized node representation.

use serde::Serialize;

use crate::core::{ContentId, NodeId, RoutePath};

/// One entry of the navigation tree (category or leaf).
///
/// Fields are only written by the pipeline stages inside this crate; the
/// public surface is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<NodeId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explicit_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_id: Option<ContentId>,
    /// Segment used for this node (explicit or derived), set by the resolver.
    #[serde(skip)]
    segment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved_path: Option<RoutePath>,
    depth: u32,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: String, parent: Option<NodeId>, depth: u32) -> Self {
        Self {
            id,
            name,
            parent,
            children: Vec::new(),
            explicit_path: None,
            content_id: None,
            segment: None,
            resolved_path: None,
            depth,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display label (the object key under the parent).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in source order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Author-supplied segment, if any.
    #[inline]
    pub fn explicit_path(&self) -> Option<&str> {
        self.explicit_path.as_deref()
    }

    #[inline]
    pub fn content_id(&self) -> Option<ContentId> {
        self.content_id
    }

    /// Segment this node contributes to its path (explicit or derived).
    #[inline]
    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    #[inline]
    pub fn resolved_path(&self) -> Option<&RoutePath> {
        self.resolved_path.as_ref()
    }

    /// Distance from the root (root = 0).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// A pure structural stub: no explicit path, no content, no children.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.explicit_path.is_none() && self.content_id.is_none() && self.children.is_empty()
    }

    // ------------------------------------------------------------------------
    // pipeline writers
    // ------------------------------------------------------------------------

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn set_explicit_path(&mut self, path: String) {
        self.explicit_path = Some(path);
    }

    pub(crate) fn set_content_id(&mut self, id: ContentId) {
        self.content_id = Some(id);
    }

    pub(crate) fn assign_path(&mut self, segment: Option<String>, path: Option<RoutePath>) {
        self.segment = segment;
        self.resolved_path = path;
    }
}
