//! Errors reported through the result sink for one function invocation.

use super::aggregate_error::AggregateError;
use super::error_code::{self, MatchColsErrorCode};

/// Outcome of a failed `matched_columns` call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error("wrong number of arguments to {function}: expected {expected}, got {actual}")]
    WrongArgumentCount {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl InvocationError {
    /// True when the failure is an allocation failure, which hosts usually
    /// report through a dedicated out-of-memory channel.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::Aggregate(AggregateError::Allocation { .. }))
    }
}

impl MatchColsErrorCode for InvocationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongArgumentCount { .. } => error_code::ARITY_ERROR,
            Self::Aggregate(e) => e.error_code(),
        }
    }
}
