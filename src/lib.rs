//! tola-nav - content-tree resolver for navigation hierarchies.
//!
//! Turns a loosely shaped, deeply nested navigation tree into a validated,
//! immutable routing snapshot:
//!
//! ```text
//! raw JSON ─► normalize ─► resolve ─► validate ─► index ─► Snapshot
//!             (tree)       (resolve)  (validate)  (index)  (snapshot)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tola_nav::{NavConfig, NavStore, RebuildOutcome};
//!
//! let store = NavStore::new();
//! match store.rebuild(&source, &NavConfig::default())? {
//!     RebuildOutcome::Rejected(report) => report.print(),
//!     _ => {}
//! }
//!
//! let snapshot = store.load();
//! let node = snapshot.resolve("/topic-a/sub-1");
//! ```

#[macro_use]
pub mod logger;

pub mod config;
pub mod core;
pub mod error;
pub mod index;
pub mod resolve;
pub mod snapshot;
pub mod tree;
pub mod utils;
pub mod validate;

pub use crate::config::{NavConfig, PublishPolicy};
pub use crate::core::{ContentId, NodeId, RoutePath};
pub use crate::error::NavError;
pub use crate::snapshot::{BuildOutcome, NavStore, RebuildOutcome, RouteEntry, Snapshot};
pub use crate::tree::{NavTree, Node};
pub use crate::validate::{ValidationReport, Violation, ViolationKind};
