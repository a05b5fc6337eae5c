//! Load-boundary error type.
//!
//! These never reach callers of `validate`: a document that fails to load is
//! "nothing to validate" and yields an empty problem list.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse pipeline JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("unexpected document shape: {0}")]
    Shape(String),
}

impl LoadError {
    pub fn shape(message: impl Into<String>) -> Self {
        LoadError::Shape(message.into())
    }
}
