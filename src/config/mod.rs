//! Resolver configuration management for `nav.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── source     # [source]
//! │   ├── slug       # [slug]
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # NavConfig (this file)
//! ```
//!
//! Every section has defaults, so a missing `nav.toml` is equivalent to an
//! empty one.

pub mod section;
pub mod types;

pub use section::{
    PublishPolicy, SlugCase, SlugConfig, SlugMode, SlugSeparator, SourceConfig, ValidateConfig,
    ValidateLevel,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::core::segment_defect;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing nav.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavConfig {
    /// Raw tree shape
    #[serde(default)]
    pub source: SourceConfig,

    /// Segment derivation
    #[serde(default)]
    pub slug: SlugConfig,

    /// Integrity checks and publish policy
    #[serde(default)]
    pub validate: ValidateConfig,
}

impl NavConfig {
    /// Load configuration from a file path.
    ///
    /// A missing file yields the defaults. Unknown fields are reported as
    /// warnings, invalid values are collected and returned together.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            crate::debug!("config"; "{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (config, ignored) = Self::parse_with_ignored(&content)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            diag.unknown_field(field);
        }
        config.validate_into(&mut diag);
        diag.print_warnings();

        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_into(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    fn validate_into(&self, diag: &mut ConfigDiagnostics) {
        let source = &self.source;

        if source.root_name.trim().is_empty() {
            diag.error(FieldPath::SOURCE_ROOT_NAME, "root name must not be empty");
        }

        for segment in source.base_path().segments() {
            if let Some(reason) = segment_defect(segment) {
                diag.error(
                    FieldPath::SOURCE_BASE,
                    format!("invalid base segment `{segment}`: {reason}"),
                );
            }
        }

        if source.url_path_keys.is_empty() {
            diag.error(FieldPath::SOURCE_URL_PATH_KEYS, "at least one key is required");
        }
        if source.content_id_keys.is_empty() {
            diag.error(FieldPath::SOURCE_CONTENT_ID_KEYS, "at least one key is required");
        }

        for key in &source.content_id_keys {
            if source.is_url_path_key(key) {
                diag.error_with_hint(
                    FieldPath::SOURCE_CONTENT_ID_KEYS,
                    format!("`{key}` is also listed as a url path key"),
                    "a reserved key can only carry one kind of value",
                );
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> NavConfig {
    let (parsed, ignored) = NavConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
