//! `[source]` section configuration.
//!
//! Describes the shape of the raw navigation tree.
//!
//! # Example
//!
//! ```toml
//! [source]
//! root_name = "root"                           # display name of the top-level object
//! base = "docs"                                # path of the root node
//! url_path_keys = ["urlPath", "___urlPath___"] # reserved keys holding an explicit segment
//! content_id_keys = ["contentId", "md", "___md___"] # reserved keys holding a content id
//! ```

use serde::{Deserialize, Serialize};

use crate::core::RoutePath;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Display name given to the top-level object.
    pub root_name: String,

    /// Path assigned to the root node. Every resolved path starts with it.
    pub base: String,

    /// Reserved keys carrying the node's explicit url segment.
    pub url_path_keys: Vec<String>,

    /// Reserved keys carrying the node's content id.
    pub content_id_keys: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root_name: "root".to_string(),
            base: String::new(),
            url_path_keys: vec!["urlPath".to_string(), "___urlPath___".to_string()],
            content_id_keys: vec![
                "contentId".to_string(),
                "md".to_string(),
                "___md___".to_string(),
            ],
        }
    }
}

impl SourceConfig {
    /// Check if `key` is a reserved url-path key.
    #[inline]
    pub fn is_url_path_key(&self, key: &str) -> bool {
        self.url_path_keys.iter().any(|k| k == key)
    }

    /// Check if `key` is a reserved content-id key.
    #[inline]
    pub fn is_content_id_key(&self, key: &str) -> bool {
        self.content_id_keys.iter().any(|k| k == key)
    }

    /// Normalized base path for the root node.
    pub fn base_path(&self) -> RoutePath {
        RoutePath::new(&self.base)
    }
}
