//! Raw tree → [`NavTree`] conversion.
//!
//! Accepted entry shapes:
//!
//! | Raw value            | Result                                  |
//! |----------------------|-----------------------------------------|
//! | object               | category; reserved keys fill its fields |
//! | `true` / `false`     | placeholder                             |
//! | `null`               | placeholder                             |
//! | non-negative integer | stub leaf with that content id          |
//! | anything else        | dropped, reported as a violation        |

use serde_json::{Map, Value};

use super::NavTree;
use crate::config::SourceConfig;
use crate::core::{ContentId, NodeId};
use crate::error::{NavError, value_kind};
use crate::validate::Violation;

/// Output of [`normalize`]: the tree plus every malformed entry found.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub tree: NavTree,
    pub violations: Vec<Violation>,
}

/// Pending entry on the work stack.
struct Frame<'a> {
    parent: NodeId,
    name: &'a str,
    value: &'a Value,
}

/// Convert a raw tree into a [`NavTree`].
///
/// Uses an explicit work stack, so depth is bounded by heap, not by the
/// call stack. Fails only when the top-level value is not an object.
pub fn normalize(raw: &Value, source: &SourceConfig) -> Result<Normalized, NavError> {
    let Value::Object(root_map) = raw else {
        return Err(NavError::RootNotObject(value_kind(raw)));
    };

    let mut tree = NavTree::with_root(source.root_name.clone());
    let mut violations = Vec::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    let entries = consume_object(&mut tree, NodeId::ROOT, root_map, source, &mut violations);
    push_entries(&mut stack, NodeId::ROOT, entries);

    while let Some(Frame {
        parent,
        name,
        value,
    }) = stack.pop()
    {
        match value {
            Value::Object(map) => {
                let id = tree.push(parent, name.to_string());
                let entries = consume_object(&mut tree, id, map, source, &mut violations);
                push_entries(&mut stack, id, entries);
            }
            Value::Bool(_) | Value::Null => {
                tree.push(parent, name.to_string());
            }
            Value::Number(number) => match number.as_u64() {
                Some(raw_id) => {
                    let id = tree.push(parent, name.to_string());
                    tree.node_mut(id).set_content_id(ContentId(raw_id));
                }
                None => violations.push(Violation::Normalization {
                    at: entry_trail(&tree, parent, name),
                    reason: format!("stub leaf must be a non-negative integer, found {number}"),
                }),
            },
            Value::String(_) | Value::Array(_) => violations.push(Violation::Normalization {
                at: entry_trail(&tree, parent, name),
                reason: format!(
                    "expected an object, boolean or content id, found {}",
                    value_kind(value)
                ),
            }),
        }
    }

    crate::debug!("normalize"; "{} nodes, {} malformed entries", tree.len(), violations.len());

    Ok(Normalized { tree, violations })
}

/// Push entries so they pop in source order.
fn push_entries<'a>(stack: &mut Vec<Frame<'a>>, parent: NodeId, entries: Vec<(&'a str, &'a Value)>) {
    stack.extend(
        entries
            .into_iter()
            .rev()
            .map(|(name, value)| Frame {
                parent,
                name,
                value,
            }),
    );
}

/// Apply reserved keys to node `id` and return the remaining child entries.
fn consume_object<'a>(
    tree: &mut NavTree,
    id: NodeId,
    map: &'a Map<String, Value>,
    source: &SourceConfig,
    violations: &mut Vec<Violation>,
) -> Vec<(&'a str, &'a Value)> {
    let mut children = Vec::with_capacity(map.len());

    for (key, value) in map {
        if source.is_url_path_key(key) {
            if let Err(reason) = apply_url_path(tree, id, value) {
                violations.push(Violation::Normalization {
                    at: entry_trail(tree, id, key),
                    reason,
                });
            }
        } else if source.is_content_id_key(key) {
            if let Err(reason) = apply_content_id(tree, id, value) {
                violations.push(Violation::Normalization {
                    at: entry_trail(tree, id, key),
                    reason,
                });
            }
        } else {
            children.push((key.as_str(), value));
        }
    }

    children
}

fn apply_url_path(tree: &mut NavTree, id: NodeId, value: &Value) -> Result<(), String> {
    let Value::String(path) = value else {
        return Err(format!("url path must be a string, found {}", value_kind(value)));
    };
    // Blank means "not decided yet"; fall back to the derived segment.
    if path.trim().is_empty() {
        return Ok(());
    }
    if id == NodeId::ROOT {
        return Err("the root node cannot carry a url path, set `source.base` instead".into());
    }

    let node = tree.node_mut(id);
    if node.explicit_path().is_some() {
        return Err("node carries more than one url path".into());
    }
    node.set_explicit_path(path.clone());
    Ok(())
}

fn apply_content_id(tree: &mut NavTree, id: NodeId, value: &Value) -> Result<(), String> {
    let Some(content_id) = parse_content_id(value)? else {
        return Ok(());
    };

    let node = tree.node_mut(id);
    if node.content_id().is_some() {
        return Err("node carries more than one content id".into());
    }
    node.set_content_id(content_id);
    Ok(())
}

/// Parse a reserved content-id value.
///
/// Blank strings and `null` are "not yet written" markers and yield `None`.
fn parse_content_id(value: &Value) -> Result<Option<ContentId>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_u64()
            .map(|raw| Some(ContentId(raw)))
            .ok_or_else(|| format!("content id must be a non-negative integer, found {number}")),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => text
            .trim()
            .parse::<u64>()
            .map(|raw| Some(ContentId(raw)))
            .map_err(|_| format!("content id must be numeric, found \"{text}\"")),
        other => Err(format!(
            "content id must be a number, found {}",
            value_kind(other)
        )),
    }
}

/// Trail of an entry that may never become a node.
fn entry_trail(tree: &NavTree, parent: NodeId, key: &str) -> String {
    if parent == NodeId::ROOT {
        key.to_string()
    } else {
        format!("{} > {}", tree.trail(parent), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use serde_json::json;

    fn run(raw: Value) -> Normalized {
        normalize(&raw, &SourceConfig::default()).unwrap()
    }

    fn find<'a>(tree: &'a NavTree, name: &str) -> &'a Node {
        tree.iter().find(|n| n.name() == name).unwrap()
    }

    #[test]
    fn test_reserved_keys_consumed() {
        let out = run(json!({
            "Topic A": { "urlPath": "topic-a", "Sub 1": { "urlPath": "sub-1", "md": 10 } }
        }));
        assert!(out.violations.is_empty());
        assert_eq!(out.tree.len(), 3);

        let topic = find(&out.tree, "Topic A");
        assert_eq!(topic.explicit_path(), Some("topic-a"));
        assert_eq!(topic.children().len(), 1);

        let sub = find(&out.tree, "Sub 1");
        assert_eq!(sub.explicit_path(), Some("sub-1"));
        assert_eq!(sub.content_id(), Some(ContentId(10)));
        assert!(sub.children().is_empty());
    }

    #[test]
    fn test_boolean_and_null_are_placeholders() {
        let out = run(json!({ "Empty Stub": true, "Off": false, "Nothing": null }));
        assert!(out.violations.is_empty());
        for name in ["Empty Stub", "Off", "Nothing"] {
            assert!(find(&out.tree, name).is_placeholder());
        }
    }

    #[test]
    fn test_bare_number_is_content_stub() {
        let out = run(json!({ "Intro": 42 }));
        let intro = find(&out.tree, "Intro");
        assert_eq!(intro.content_id(), Some(ContentId(42)));
        assert_eq!(intro.explicit_path(), None);
        assert!(!intro.is_placeholder());
    }

    #[test]
    fn test_alternate_reserved_keys() {
        let out = run(json!({
            "Guide": { "___urlPath___": "guide", "___md___": 7 }
        }));
        let guide = find(&out.tree, "Guide");
        assert_eq!(guide.explicit_path(), Some("guide"));
        assert_eq!(guide.content_id(), Some(ContentId(7)));
    }

    #[test]
    fn test_order_preserved() {
        let out = run(json!({ "Zeta": true, "Alpha": true, "Mid": { "b": 1, "a": 2 } }));
        let top: Vec<_> = out.tree.children(NodeId::ROOT).map(Node::name).collect();
        assert_eq!(top, vec!["Zeta", "Alpha", "Mid"]);

        let mid = find(&out.tree, "Mid").id();
        let nested: Vec<_> = out.tree.children(mid).map(Node::name).collect();
        assert_eq!(nested, vec!["b", "a"]);
    }

    #[test]
    fn test_wrong_types_collected_not_thrown() {
        let out = run(json!({
            "A": { "urlPath": 5 },
            "B": { "md": "abc" },
            "C": "text",
            "D": [1, 2],
            "E": -3,
            "F": 1.5,
            "G": { "md": true }
        }));
        assert_eq!(out.violations.len(), 7);
        assert!(
            out.violations
                .iter()
                .all(|v| matches!(v, Violation::Normalization { .. }))
        );

        // malformed objects keep their node, malformed leaves are dropped
        assert!(out.tree.iter().any(|n| n.name() == "A"));
        assert!(out.tree.iter().any(|n| n.name() == "B"));
        assert!(!out.tree.iter().any(|n| n.name() == "C"));
        assert!(!out.tree.iter().any(|n| n.name() == "E"));
    }

    #[test]
    fn test_violation_trail() {
        let out = run(json!({ "Topic": { "Sub": { "md": [] } } }));
        let Violation::Normalization { at, .. } = &out.violations[0] else {
            panic!("expected normalization violation");
        };
        assert_eq!(at, "Topic > Sub > md");
    }

    #[test]
    fn test_blank_values_are_absent() {
        let out = run(json!({ "Draft": { "urlPath": "  ", "md": "" } }));
        assert!(out.violations.is_empty());
        assert!(find(&out.tree, "Draft").is_placeholder());
    }

    #[test]
    fn test_numeric_string_content_id() {
        let out = run(json!({ "Page": { "md": "62" } }));
        assert_eq!(find(&out.tree, "Page").content_id(), Some(ContentId(62)));
    }

    #[test]
    fn test_duplicate_reserved_keys() {
        let out = run(json!({
            "Page": { "urlPath": "a", "___urlPath___": "b", "md": 1, "contentId": 2 }
        }));
        assert_eq!(out.violations.len(), 2);
        let page = find(&out.tree, "Page");
        assert_eq!(page.explicit_path(), Some("a"));
        assert_eq!(page.content_id(), Some(ContentId(1)));
    }

    #[test]
    fn test_root_url_path_rejected() {
        let out = run(json!({ "urlPath": "site", "md": 3, "A": true }));
        assert_eq!(out.violations.len(), 1);
        assert_eq!(out.tree.root().explicit_path(), None);
        assert_eq!(out.tree.root().content_id(), Some(ContentId(3)));
    }

    #[test]
    fn test_root_must_be_object() {
        let result = normalize(&json!([1, 2]), &SourceConfig::default());
        assert!(matches!(result, Err(NavError::RootNotObject("array"))));
    }

    #[test]
    fn test_deep_tree_without_recursion() {
        const DEPTH: usize = 2_000;

        let mut raw = json!({ "md": 1 });
        for level in (0..DEPTH).rev() {
            let mut map = Map::new();
            map.insert(format!("Level {level}"), raw);
            raw = Value::Object(map);
        }

        let out = run(raw);
        assert!(out.violations.is_empty());
        assert_eq!(out.tree.len(), DEPTH + 1);
        let deepest = out.tree.iter().last().unwrap();
        assert_eq!(deepest.depth() as usize, DEPTH);
        assert_eq!(deepest.content_id(), Some(ContentId(1)));
    }
}
