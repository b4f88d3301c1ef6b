//! Error types for the graph model.

use thiserror::Error;

/// Errors raised when untyped input enters the graph model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Element type tag outside ACTIVITY, ROLE and RULE.
    #[error("{0} type not parsed correctly. Only accepts 'ACTIVITY', 'ROLE' and 'RULE'")]
    UnknownElementType(String),
}

impl ModelError {
    /// Create an unknown element type error.
    pub fn unknown_type(tag: impl Into<String>) -> Self {
        Self::UnknownElementType(tag.into())
    }
}
