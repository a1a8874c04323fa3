//! Errors from parsing a rendered column list.

use super::error_code::{self, MatchColsErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnListError {
    #[error("invalid column entry {entry:?} at position {position}")]
    InvalidEntry { entry: String, position: usize },

    #[error("column {column} listed more than once")]
    DuplicateColumn { column: usize },
}

impl MatchColsErrorCode for ColumnListError {
    fn error_code(&self) -> &'static str {
        error_code::COLUMN_LIST_ERROR
    }
}
