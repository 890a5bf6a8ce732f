//! Published navigation snapshots and the read-only query API.
//!
//! A [`Snapshot`] bundles a resolved tree, its route index and the report
//! it was built with. It is immutable once built; [`NavStore`] swaps whole
//! snapshots atomically so readers never see a half-built index.
//!
//! | Query                  | Cost        |
//! |------------------------|-------------|
//! | `resolve(path)`        | O(1)        |
//! | `by_content_id(id)`    | O(1)        |
//! | `breadcrumbs(path)`    | O(depth)    |
//! | `children(path)`       | O(children) |
//! | `siblings(path)`       | O(siblings) |
//! | `parent(path)`         | O(1)        |

mod build;
mod store;

pub use build::{
    BuildOutcome, build_from_str, build_snapshot, parse_source, read_source, source_fingerprint,
};
pub use store::{NavStore, RebuildOutcome};

use serde::Serialize;

use crate::core::{ContentId, NodeId, RoutePath};
use crate::index::RouteIndex;
use crate::tree::{NavTree, Node};
use crate::validate::ValidationReport;

/// One immutable, fully-built navigation view.
#[derive(Debug, Clone)]
pub struct Snapshot {
    tree: NavTree,
    index: RouteIndex,
    report: ValidationReport,
    fingerprint: Option<u64>,
}

/// Serializable row of the routing table.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry<'a> {
    pub path: &'a RoutePath,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<ContentId>,
    pub depth: u32,
}

impl<'a> RouteEntry<'a> {
    /// Row for a node, if it has a resolved path.
    pub fn of(node: &'a Node) -> Option<Self> {
        Some(Self {
            path: node.resolved_path()?,
            name: node.name(),
            content_id: node.content_id(),
            depth: node.depth(),
        })
    }
}

impl Snapshot {
    pub(crate) fn new(
        tree: NavTree,
        index: RouteIndex,
        report: ValidationReport,
        fingerprint: Option<u64>,
    ) -> Self {
        Self {
            tree,
            index,
            report,
            fingerprint,
        }
    }

    /// A snapshot with no routes, published before the first build.
    pub fn empty() -> Self {
        Self::new(
            NavTree::with_root(String::new()),
            RouteIndex::default(),
            ValidationReport::default(),
            None,
        )
    }

    #[inline]
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// Violations found while building (non-empty only under partial policy).
    #[inline]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Hash of the source text and config this snapshot was built from.
    #[inline]
    pub fn fingerprint(&self) -> Option<u64> {
        self.fingerprint
    }

    /// Number of routable nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // ------------------------------------------------------------------------
    // queries
    // ------------------------------------------------------------------------

    /// Look up the node published at `path`.
    ///
    /// Accepts browser-shaped input: surrounding slashes, query strings and
    /// percent-encoding are all handled.
    pub fn resolve(&self, path: &str) -> Option<&Node> {
        self.lookup(path).map(|id| &self.tree[id])
    }

    /// Look up the node carrying a content id.
    ///
    /// Placeholder ids and ids shared by several nodes are never indexed.
    pub fn by_content_id(&self, id: ContentId) -> Option<&Node> {
        self.index
            .node_for_content(id)
            .map(|node| &self.tree[node])
    }

    /// Published nodes from the root down to the node at `path`, inclusive.
    ///
    /// Ancestors withheld by the partial policy are skipped.
    pub fn breadcrumbs(&self, path: &str) -> Option<Vec<&Node>> {
        let id = self.lookup(path)?;
        let mut trail: Vec<&Node> = self
            .tree
            .ancestors(id)
            .into_iter()
            .filter(|node| self.index.is_routable(&self.tree, node.id()))
            .collect();
        trail.push(&self.tree[id]);
        Some(trail)
    }

    /// Routable children of the node at `path`, in source order.
    pub fn children(&self, path: &str) -> Option<Vec<&Node>> {
        let id = self.lookup(path)?;
        Some(self.nodes_of(self.index.children_of(id)))
    }

    /// Routable children of the node's parent, the node itself included.
    pub fn siblings(&self, path: &str) -> Option<Vec<&Node>> {
        let id = self.lookup(path)?;
        let node = &self.tree[id];
        match node.parent() {
            Some(parent) if self.index.is_routable(&self.tree, parent) => {
                Some(self.nodes_of(self.index.children_of(parent)))
            }
            _ => Some(vec![node]),
        }
    }

    /// Parent of the node at `path`, if the parent is routable.
    pub fn parent(&self, path: &str) -> Option<&Node> {
        let parent = self.tree[self.lookup(path)?].parent()?;
        self.index
            .is_routable(&self.tree, parent)
            .then(|| &self.tree[parent])
    }

    /// Every published route in pre-order.
    pub fn routes(&self) -> impl Iterator<Item = (&RoutePath, &Node)> {
        self.index.order().iter().filter_map(|&id| {
            let node = &self.tree[id];
            node.resolved_path().map(|path| (path, node))
        })
    }

    /// The routing table as serializable rows.
    pub fn entries(&self) -> Vec<RouteEntry<'_>> {
        self.routes()
            .filter_map(|(_, node)| RouteEntry::of(node))
            .collect()
    }

    /// Exact match first, so verbatim segments containing `%` stay
    /// reachable. Browser decoding applies only on a miss.
    fn lookup(&self, path: &str) -> Option<NodeId> {
        self.index
            .node_for_path(RoutePath::new(path).as_str())
            .or_else(|| {
                self.index
                    .node_for_path(RoutePath::from_browser(path).as_str())
            })
    }

    fn nodes_of(&self, ids: &[NodeId]) -> Vec<&Node> {
        ids.iter().map(|&id| &self.tree[id]).collect()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavConfig, PublishPolicy};
    use crate::validate::ViolationKind;
    use serde_json::{Value, json};

    fn snapshot(raw: Value) -> Snapshot {
        snapshot_with(raw, &NavConfig::default())
    }

    fn snapshot_with(raw: Value, config: &NavConfig) -> Snapshot {
        match build_snapshot(&raw, config, None).unwrap() {
            BuildOutcome::Published(snapshot) => snapshot,
            BuildOutcome::Rejected(report) => panic!("rejected: {}", report.format()),
        }
    }

    fn names(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.name().to_string()).collect()
    }

    fn course() -> Value {
        json!({
            "Basics": {
                "urlPath": "basics",
                "What is JavaScript?": 3,
                "Variables": { "md": 4, "Let and Const": 5 },
                "Coming Soon": true,
                "Types": 6
            },
            "Advanced": { "Closures": 7 }
        })
    }

    #[test]
    fn test_scenario_explicit_paths() {
        let snap = snapshot(json!({
            "Topic A": { "urlPath": "topic-a", "Sub 1": { "urlPath": "sub-1", "md": 10 } }
        }));
        let topic = snap.resolve("topic-a").unwrap();
        assert_eq!(topic.name(), "Topic A");
        let sub = snap.resolve("topic-a/sub-1").unwrap();
        assert_eq!(sub.name(), "Sub 1");
        assert_eq!(snap.by_content_id(ContentId(10)).unwrap().id(), sub.id());
    }

    #[test]
    fn test_scenario_sibling_collision_not_published() {
        let raw = json!({ "Guide": { "Overview": 1, "overview": 2 } });
        let outcome = build_snapshot(&raw, &NavConfig::default(), None).unwrap();
        assert!(matches!(outcome, BuildOutcome::Rejected(_)));

        let mut config = NavConfig::default();
        config.validate.policy = PublishPolicy::Partial;
        let snap = snapshot_with(raw, &config);
        assert_eq!(snap.report().count(ViolationKind::DuplicatePath), 1);
        assert!(snap.resolve("guide/overview").is_none());
        assert!(snap.by_content_id(ContentId(1)).is_none());
        assert!(snap.by_content_id(ContentId(2)).is_none());
    }

    #[test]
    fn test_scenario_placeholder_invisible() {
        let snap = snapshot(json!({ "Empty Stub": true }));
        assert!(snap.report().is_clean());
        assert!(snap.resolve("empty-stub").is_none());
        assert!(snap.routes().all(|(_, node)| node.name() != "Empty Stub"));
        assert_eq!(snap.children("").unwrap().len(), 0);
    }

    #[test]
    fn test_scenario_derived_segment() {
        let snap = snapshot(course());
        let node = snap.resolve("basics/what-is-javascript").unwrap();
        assert_eq!(node.name(), "What is JavaScript?");
        assert_eq!(snap.by_content_id(ContentId(3)).unwrap().id(), node.id());
    }

    #[test]
    fn test_round_trip_lookup() {
        let snap = snapshot(course());
        for node in snap.tree().iter() {
            if let Some(path) = node.resolved_path() {
                assert_eq!(snap.resolve(path.as_str()).unwrap().id(), node.id());
            }
        }
    }

    #[test]
    fn test_children_in_source_order() {
        let snap = snapshot(course());
        let children = snap.children("basics").unwrap();
        assert_eq!(
            names(&children),
            vec!["What is JavaScript?", "Variables", "Types"]
        );
        assert_eq!(names(&snap.children("/").unwrap()), vec!["Basics", "Advanced"]);
        assert!(snap.children("missing").is_none());
    }

    #[test]
    fn test_breadcrumbs_root_to_self() {
        let snap = snapshot(course());
        let trail = snap.breadcrumbs("basics/variables/let-and-const").unwrap();
        assert_eq!(
            names(&trail),
            vec!["root", "Basics", "Variables", "Let and Const"]
        );
        assert_eq!(names(&snap.breadcrumbs("").unwrap()), vec!["root"]);
        assert!(snap.breadcrumbs("basics/nope").is_none());
    }

    #[test]
    fn test_siblings_and_parent() {
        let snap = snapshot(course());
        let siblings = snap.siblings("basics/types").unwrap();
        assert_eq!(
            names(&siblings),
            vec!["What is JavaScript?", "Variables", "Types"]
        );
        assert_eq!(snap.parent("basics/types").unwrap().name(), "Basics");
        assert_eq!(names(&snap.siblings("").unwrap()), vec!["root"]);
        assert!(snap.parent("").is_none());
    }

    #[test]
    fn test_browser_shaped_lookup() {
        let snap = snapshot(json!({ "Café": { "Menü": 1 } }));
        assert!(snap.resolve("/café/menü/").is_some());
        assert!(snap.resolve("/caf%C3%A9/men%C3%BC?tab=1#top").is_some());
    }

    #[test]
    fn test_verbatim_percent_segment_round_trips() {
        let snap = snapshot(json!({ "C++": { "urlPath": "c%2B%2B", "md": 5 } }));
        assert!(snap.report().is_clean());
        let node = snap.by_content_id(ContentId(5)).unwrap();
        let path = node.resolved_path().unwrap();
        assert_eq!(path.as_str(), "c%2B%2B");
        assert_eq!(snap.resolve(path.as_str()).unwrap().id(), node.id());
        assert_eq!(snap.resolve("/c%2B%2B/").unwrap().id(), node.id());
    }

    #[test]
    fn test_breadcrumbs_skip_withheld_ancestors() {
        let mut config = NavConfig::default();
        config.validate.policy = PublishPolicy::Partial;
        let snap = snapshot_with(
            json!({ "Guide": { "Setup": 1 }, "guide": { "Deploy": 2 } }),
            &config,
        );
        assert!(snap.resolve("guide").is_none());
        let trail = snap.breadcrumbs("guide/setup").unwrap();
        assert_eq!(names(&trail), vec!["root", "Setup"]);
        for node in &trail {
            let path = node.resolved_path().unwrap();
            assert_eq!(snap.resolve(path.as_str()).unwrap().id(), node.id());
        }
    }

    #[test]
    fn test_routes_preorder() {
        let snap = snapshot(course());
        let paths: Vec<_> = snap.routes().map(|(path, _)| path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "",
                "basics",
                "basics/what-is-javascript",
                "basics/variables",
                "basics/variables/let-and-const",
                "basics/types",
                "advanced",
                "advanced/closures",
            ]
        );
        assert_eq!(snap.len(), paths.len());
    }

    #[test]
    fn test_entries_serialize() {
        let snap = snapshot(json!({ "Intro": 1 }));
        let json = serde_json::to_value(snap.entries()).unwrap();
        assert_eq!(json[1]["path"], "intro");
        assert_eq!(json[1]["content_id"], 1);
        assert!(json[0].get("content_id").is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let snap = Snapshot::empty();
        assert!(snap.is_empty());
        assert!(snap.resolve("").is_none());
        assert_eq!(snap.fingerprint(), None);
    }

    #[test]
    fn test_deep_tree() {
        const DEPTH: usize = 2_000;

        let mut raw = json!({ "md": DEPTH });
        for level in (0..DEPTH).rev() {
            let mut map = serde_json::Map::new();
            map.insert(format!("Level {level}"), raw);
            raw = Value::Object(map);
        }
        let snap = snapshot(raw);

        let path = (0..DEPTH)
            .map(|level| format!("level-{level}"))
            .collect::<Vec<_>>()
            .join("/");
        let leaf = snap.resolve(&path).unwrap();
        assert_eq!(leaf.depth() as usize, DEPTH);
        assert_eq!(snap.by_content_id(ContentId(DEPTH as u64)).unwrap().id(), leaf.id());
        assert_eq!(snap.breadcrumbs(&path).unwrap().len(), DEPTH + 1);
    }
}
