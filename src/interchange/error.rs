//! Error types for interchange operations.

use thiserror::Error;

use crate::compare::CompareError;

/// Errors that can occur while reading requests or writing reports.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing required element or attribute.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Invalid element or attribute value.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },

    /// The request was read but could not be configured or compared.
    #[error(transparent)]
    Compare(#[from] CompareError),
}

impl InterchangeError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a missing element error.
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "attribute",
            name: name.into(),
        }
    }

    /// Create an invalid attribute error.
    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "attribute",
            message: message.into(),
        }
    }
}
