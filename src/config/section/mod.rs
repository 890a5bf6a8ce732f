//! Configuration section definitions.
//!
//! Each module corresponds to a section in `nav.toml`:
//!
//! | Module     | TOML Section   | Purpose                              |
//! |------------|----------------|--------------------------------------|
//! | `source`   | `[source]`     | Raw tree shape, reserved keys, base  |
//! | `slug`     | `[slug]`       | Segment derivation from names        |
//! | `validate` | `[validate]`   | Integrity checks and publish policy  |

mod slug;
mod source;
mod validate;

pub use slug::{SlugCase, SlugConfig, SlugMode, SlugSeparator};
pub use source::SourceConfig;
pub use validate::{PublishPolicy, ValidateConfig, ValidateLevel};
