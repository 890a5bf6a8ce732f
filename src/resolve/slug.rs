//! Segment derivation from display names.
//!
//! `slugify` is a pure, total function of `(name, config)`: the same name
//! always yields the same segment, across runs and processes.
//!
//! | Name                    | Segment (defaults)      |
//! |-------------------------|-------------------------|
//! | `What is JavaScript?`   | `what-is-javascript`    |
//! | `  Arrays & Loops  `    | `arrays-loops`          |
//! | `Café Menü`             | `café-menü`             |
//! | `Café Menü` (ascii)     | `cafe-menu`             |

use std::borrow::Cow;

use crate::config::{SlugCase, SlugConfig, SlugMode};

/// Derive a path segment from a display name.
///
/// Runs of whitespace and disallowed characters collapse into a single
/// separator; leading and trailing separators are stripped. May return an
/// empty string when the name has no allowed characters at all.
pub fn slugify(name: &str, config: &SlugConfig) -> String {
    let source: Cow<'_, str> = match config.mode {
        SlugMode::Safe => Cow::Borrowed(name),
        SlugMode::Ascii => Cow::Owned(deunicode::deunicode(name)),
    };
    let separator = config.separator.as_char();

    let mut slug = String::with_capacity(source.len());
    let mut pending_separator = false;

    for ch in source.chars() {
        if !is_kept(ch, config.mode) {
            pending_separator = true;
            continue;
        }
        if pending_separator && !slug.is_empty() {
            slug.push(separator);
        }
        pending_separator = false;
        match config.case {
            SlugCase::Lower => slug.extend(ch.to_lowercase()),
            SlugCase::Preserve => slug.push(ch),
        }
    }

    slug
}

#[inline]
fn is_kept(ch: char, mode: SlugMode) -> bool {
    match mode {
        SlugMode::Safe => ch.is_alphanumeric(),
        SlugMode::Ascii => ch.is_ascii_alphanumeric(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlugSeparator;

    fn slug(name: &str) -> String {
        slugify(name, &SlugConfig::default())
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(slug("What is JavaScript?"), "what-is-javascript");
    }

    #[test]
    fn test_runs_collapse_and_edges_trimmed() {
        assert_eq!(slug("  Arrays   &  Loops  "), "arrays-loops");
        assert_eq!(slug("--Intro--"), "intro");
        assert_eq!(slug("C++ / C#"), "c-c");
        assert_eq!(slug("Sub-1"), "sub-1");
    }

    #[test]
    fn test_unicode_kept_in_safe_mode() {
        assert_eq!(slug("Café Menü"), "café-menü");
        assert_eq!(slug("中文 教程"), "中文-教程");
    }

    #[test]
    fn test_ascii_mode_transliterates() {
        let config = SlugConfig {
            mode: SlugMode::Ascii,
            ..SlugConfig::default()
        };
        assert_eq!(slugify("Café Menü", &config), "cafe-menu");
    }

    #[test]
    fn test_separator_and_case() {
        let config = SlugConfig {
            separator: SlugSeparator::Underscore,
            case: SlugCase::Preserve,
            ..SlugConfig::default()
        };
        assert_eq!(slugify("What is JavaScript?", &config), "What_is_JavaScript");
    }

    #[test]
    fn test_no_allowed_characters() {
        assert_eq!(slug("???"), "");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_deterministic() {
        let name = "Déjà Vu: Part II";
        assert_eq!(slug(name), slug(name));
    }
}
