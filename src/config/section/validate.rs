//! `[validate]` section configuration.
//!
//! Controls the integrity checks and what happens when they fail.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! placeholder_id_max = 0     # content ids <= this value may repeat freely
//! policy = "reject"          # reject | partial
//! level = "error"            # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

use crate::core::ContentId;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidateConfig {
    /// Content ids at or below this value are "not yet written" markers and
    /// are exempt from the duplicate content id check.
    pub placeholder_id_max: u64,

    /// What to publish when violations are found.
    pub policy: PublishPolicy,

    /// How `check` treats violations: "error" or "warn".
    pub level: ValidateLevel,
}

impl ValidateConfig {
    /// Check if a content id is a placeholder marker.
    #[inline]
    pub fn is_placeholder_id(&self, id: ContentId) -> bool {
        id.get() <= self.placeholder_id_max
    }
}

/// Publish policy applied by the caller of the index builder.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PublishPolicy {
    /// Any violation rejects the whole build (default).
    #[default]
    Reject,
    /// Publish everything except the conflicting entries.
    Partial,
}

/// Validation error level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Treat violations as errors (`check` fails).
    #[default]
    Error,
    /// Treat violations as warnings (`check` succeeds).
    Warn,
}

// ============================================================================
// Tests
// ============================================================================
