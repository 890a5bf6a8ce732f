//! `[slug]` section configuration.
//!
//! Controls how a segment is derived from a display name when the author
//! did not supply an explicit url path.
//!
//! # Example
//!
//! ```toml
//! [slug]
//! mode = "safe"          # safe | ascii
//! separator = "dash"     # dash | underscore
//! case = "lower"         # lower | preserve
//! ```

use serde::{Deserialize, Serialize};

/// Slug generation mode for derived segments.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Keep Unicode letters and digits, replace everything else (default).
    #[default]
    Safe,
    /// Transliterate Unicode → ASCII first, then keep ASCII letters and digits.
    Ascii,
}

/// Case transformation mode for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugCase {
    /// Convert to lowercase (default).
    #[default]
    Lower,
    /// Preserve original case.
    Preserve,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugConfig {
    /// Character class kept in derived segments.
    pub mode: SlugMode,
    /// Separator character for whitespace and disallowed characters.
    pub separator: SlugSeparator,
    /// Case transformation.
    pub case: SlugCase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.slug.mode, SlugMode::Safe);
        assert_eq!(config.slug.separator, SlugSeparator::Dash);
        assert_eq!(config.slug.case, SlugCase::Lower);
    }

    #[test]
    fn test_mode_parsing() {
        for (input, expected) in [("safe", SlugMode::Safe), ("ascii", SlugMode::Ascii)] {
            let config = test_parse_config(&format!("[slug]\nmode = \"{input}\""));
            assert_eq!(config.slug.mode, expected, "mode failed for {input}");
        }
    }

    #[test]
    fn test_separator_parsing() {
        let config = test_parse_config("[slug]\nseparator = \"underscore\"");
        assert_eq!(config.slug.separator, SlugSeparator::Underscore);
        assert_eq!(config.slug.separator.as_char(), '_');

        let config = test_parse_config("[slug]\nseparator = \"dash\"");
        assert_eq!(config.slug.separator.as_char(), '-');
    }

    #[test]
    fn test_case_parsing() {
        for (input, expected) in [("lower", SlugCase::Lower), ("preserve", SlugCase::Preserve)] {
            let config = test_parse_config(&format!("[slug]\ncase = \"{input}\""));
            assert_eq!(config.slug.case, expected, "case failed for {input}");
        }
    }
}
