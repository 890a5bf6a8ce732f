//! Core types - pure value types shared across the pipeline.

mod id;
mod path;

pub use id::{ContentId, NodeId};
pub use path::{RoutePath, segment_defect};
