//! Whole-input errors.
//!
//! These are the only conditions that stop a pipeline run. Everything wrong
//! *inside* a well-formed input is a [`Violation`](crate::validate::Violation)
//! and gets collected instead.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("source is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("top-level value must be an object, found {0}")]
    RootNotObject(&'static str),
}

/// Human-readable name of a raw value's type, for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
