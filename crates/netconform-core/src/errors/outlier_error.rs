//! Outlier query errors.

use super::error_code::{self, NetconformErrorCode};

/// Errors that abort an outlier query. None of them are retryable: the
/// engine is a pure function of its snapshot.
#[derive(Debug, thiserror::Error)]
pub enum OutlierError {
    #[error("Invalid node filter '{pattern}': {message}")]
    InvalidFilter { pattern: String, message: String },

    #[error("{subject} has no equivalence classes")]
    EmptyEquivalence { subject: String },

    #[error("Unexpected outlier detection hypothesis: {0}")]
    UnknownHypothesis(String),
}

impl NetconformErrorCode for OutlierError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFilter { .. } => error_code::INVALID_FILTER,
            Self::EmptyEquivalence { .. } => error_code::EMPTY_EQUIVALENCE,
            Self::UnknownHypothesis(_) => error_code::UNKNOWN_HYPOTHESIS,
        }
    }
}
