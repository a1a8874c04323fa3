//! Errors from the query helpers that consume `matched_columns` output.

use super::column_list_error::ColumnListError;
use super::error_code::{self, MatchColsErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("invalid table identifier: {name:?}")]
    InvalidIdentifier { name: String },

    #[error("malformed matched_columns value: {0}")]
    ColumnList(#[from] ColumnListError),
}

impl MatchColsErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sqlite { .. } => error_code::SQLITE_ERROR,
            Self::InvalidIdentifier { .. } => error_code::INVALID_IDENTIFIER,
            Self::ColumnList(e) => e.error_code(),
        }
    }
}
