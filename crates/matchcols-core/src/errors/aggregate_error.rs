//! Errors raised while aggregating matched columns.

use super::error_code::{self, MatchColsErrorCode};

/// Failures inside the column-match aggregator.
///
/// Any of these aborts the whole aggregation: no partial list is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("allocation failed for {what} ({requested} bytes requested)")]
    Allocation { what: &'static str, requested: usize },

    #[error("phrase {phrase} reported column {column}, outside 0..{column_count}")]
    ColumnOutOfRange {
        phrase: usize,
        column: i64,
        column_count: usize,
    },

    #[error("column iteration for phrase {phrase} failed with code {code}")]
    PhraseUnavailable { phrase: usize, code: i32 },

    #[error("match context unavailable: {reason}")]
    ContextUnavailable { reason: String },
}

impl MatchColsErrorCode for AggregateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Allocation { .. } => error_code::ALLOCATION_ERROR,
            Self::ColumnOutOfRange { .. } => error_code::COLUMN_OUT_OF_RANGE,
            Self::PhraseUnavailable { .. } | Self::ContextUnavailable { .. } => {
                error_code::CONTEXT_ERROR
            }
        }
    }
}
