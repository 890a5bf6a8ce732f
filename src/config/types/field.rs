//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each section exposes its field paths as constants so diagnostics never
/// carry hand-typed strings:
///
/// ```ignore
/// diag.error(FieldPath::SOURCE_URL_PATH_KEYS, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    pub const SOURCE_ROOT_NAME: Self = Self("source.root_name");
    pub const SOURCE_BASE: Self = Self("source.base");
    pub const SOURCE_URL_PATH_KEYS: Self = Self("source.url_path_keys");
    pub const SOURCE_CONTENT_ID_KEYS: Self = Self("source.content_id_keys");

    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
