//! Route path type for type-safe navigation paths.
//!
//! - Internal representation: always decoded, no leading or trailing `/`
//! - Browser boundary: decode on input via [`RoutePath::from_browser`]
//!
//! ```text
//! ""                  root / empty base
//! "topic-a"           top-level entry
//! "topic-a/sub-1"     nested entry
//! ```

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded route path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Never starts or ends with `/`
/// - The root path is the empty string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// The empty root path.
    pub fn root() -> Self {
        Self(Arc::from(""))
    }

    /// Create from browser URL (decode percent-encoding, strip query string and fragment).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;

        let path = strip_query_fragment(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::new(&decoded)
    }

    /// Create from an already decoded path. Trims whitespace and surrounding slashes.
    pub fn new(decoded: &str) -> Self {
        Self(Arc::from(trim_path(decoded)))
    }

    /// Join one segment onto this path.
    ///
    /// The segment is used verbatim; callers are responsible for rejecting
    /// malformed segments (see [`segment_defect`]).
    pub fn join(&self, segment: &str) -> Self {
        if self.is_root() {
            Self(Arc::from(segment))
        } else {
            Self(Arc::from(format!("{}/{}", self.0, segment)))
        }
    }

    /// Get the decoded path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the path segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Number of segments (`""` -> 0, `a/b` -> 2).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Last segment, if any.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Get parent path.
    ///
    /// `a/b/c` -> `a/b`, `a` -> ``, `` -> `None`
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(idx) => Some(Self(Arc::from(&self.0[..idx]))),
            None => Some(Self::root()),
        }
    }

    /// Check that this path is exactly one segment below `parent`.
    pub fn is_child_of(&self, parent: &RoutePath) -> bool {
        let rest = if parent.is_root() {
            Some(self.as_str())
        } else {
            self.0
                .strip_prefix(parent.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
        };
        rest.is_some_and(|seg| !seg.is_empty() && !seg.contains('/'))
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.segments()
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Trim whitespace, query/fragment free input down to its slash-free core.
#[inline]
fn trim_path(path: &str) -> &str {
    path.trim().trim_matches('/')
}

fn strip_query_fragment(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Describe why a single path segment is unusable, or `None` if it is fine.
///
/// A segment must be non-empty, must not be `.`/`..`, and must not contain
/// characters that would move it into another subtree or out of the path.
pub fn segment_defect(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        return Some("segment is empty");
    }
    if segment.trim() != segment {
        return Some("segment has surrounding whitespace");
    }
    if segment == "." || segment == ".." {
        return Some("segment is a relative path component");
    }
    if segment.contains(['/', '\\']) {
        return Some("segment contains a path separator");
    }
    if segment.contains(['?', '#']) {
        return Some("segment contains a query or fragment marker");
    }
    None
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RoutePath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RoutePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoutePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_slashes() {
        assert_eq!(RoutePath::new("/topic-a/sub-1/").as_str(), "topic-a/sub-1");
        assert_eq!(RoutePath::new("  topic-a ").as_str(), "topic-a");
        assert!(RoutePath::new("/").is_root());
        assert!(RoutePath::new("").is_root());
    }

    #[test]
    fn test_from_browser_decodes() {
        let path = RoutePath::from_browser("/posts/%E4%B8%AD%E6%96%87/");
        assert_eq!(path.as_str(), "posts/中文");
    }

    #[test]
    fn test_from_browser_strips_query_and_fragment() {
        let path = RoutePath::from_browser("/topic-a/sub-1?v=1#intro");
        assert_eq!(path.as_str(), "topic-a/sub-1");
    }

    #[test]
    fn test_from_browser_invalid_utf8_kept() {
        let path = RoutePath::from_browser("/posts/%FF/");
        assert_eq!(path.as_str(), "posts/%FF");
    }

    #[test]
    fn test_join() {
        let root = RoutePath::root();
        let a = root.join("topic-a");
        assert_eq!(a.as_str(), "topic-a");
        assert_eq!(a.join("sub-1").as_str(), "topic-a/sub-1");
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            RoutePath::new("a/b/c").parent(),
            Some(RoutePath::new("a/b"))
        );
        assert_eq!(RoutePath::new("a").parent(), Some(RoutePath::root()));
        assert_eq!(RoutePath::root().parent(), None);
    }

    #[test]
    fn test_is_child_of() {
        let parent = RoutePath::new("topic-a");
        assert!(RoutePath::new("topic-a/sub-1").is_child_of(&parent));
        assert!(!RoutePath::new("topic-a/sub-1/x").is_child_of(&parent));
        assert!(!RoutePath::new("topic-ab").is_child_of(&parent));
        assert!(!RoutePath::new("topic-a").is_child_of(&parent));
        assert!(RoutePath::new("topic-a").is_child_of(&RoutePath::root()));
    }

    #[test]
    fn test_segments_and_depth() {
        let path = RoutePath::new("a/b/c");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(path.depth(), 3);
        assert_eq!(path.last_segment(), Some("c"));
        assert_eq!(RoutePath::root().depth(), 0);
        assert_eq!(RoutePath::root().last_segment(), None);
    }

    #[test]
    fn test_segment_defect() {
        assert_eq!(segment_defect("sub-1"), None);
        assert_eq!(segment_defect("中文"), None);
        assert!(segment_defect("").is_some());
        assert!(segment_defect("..").is_some());
        assert!(segment_defect("a/b").is_some());
        assert!(segment_defect("a\\b").is_some());
        assert!(segment_defect("a?b").is_some());
        assert!(segment_defect(" a").is_some());
    }

    #[test]
    fn test_to_encoded() {
        let path = RoutePath::new("posts/hello world");
        assert_eq!(path.to_encoded(), "posts/hello%20world");
    }

    #[test]
    fn test_display() {
        assert_eq!(RoutePath::new("topic-a/sub-1").to_string(), "/topic-a/sub-1");
        assert_eq!(RoutePath::root().to_string(), "/");
    }

    #[test]
    fn test_borrow_lookup() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(RoutePath::new("topic-a"));
        set.insert(RoutePath::new("/topic-a/"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("topic-a"));
    }

    #[test]
    fn test_serialize_deserialize() {
        let path = RoutePath::new("posts/中文");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#""posts/中文""#);

        let parsed: RoutePath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, path);
    }
}
