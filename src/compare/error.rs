//! Error types for comparison and evaluation.

use thiserror::Error;

use crate::model::ModelError;

/// Errors that can occur while configuring, running or scoring a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// Invalid element type in the compare types.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Compare method outside spans, labels and compositions.
    #[error("Compare method > {0} < not recognized.")]
    UnknownMethod(String),

    /// Evaluation method outside union and source_intersection.
    #[error("Comparison Method > {0} < not recognized.")]
    UnknownEvaluationMethod(String),

    /// A matcher that was requested but has no implementation.
    #[error("Matcher '{matcher}' is not supported")]
    UnsupportedMatcher { matcher: &'static str },
}

impl CompareError {
    /// Create an unsupported matcher error.
    pub fn unsupported(matcher: &'static str) -> Self {
        Self::UnsupportedMatcher { matcher }
    }
}
