//! MatchColsErrorCode trait for host-facing error reporting.

/// Every error enum maps to a stable code string so hosts can branch on the
/// failure kind without parsing messages.
pub trait MatchColsErrorCode {
    /// Returns the error code string (e.g., "ARITY_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ARITY_ERROR: &str = "ARITY_ERROR";
pub const ALLOCATION_ERROR: &str = "ALLOCATION_ERROR";
pub const COLUMN_OUT_OF_RANGE: &str = "COLUMN_OUT_OF_RANGE";
pub const CONTEXT_ERROR: &str = "CONTEXT_ERROR";
pub const FTS5_UNAVAILABLE: &str = "FTS5_UNAVAILABLE";
pub const REGISTRATION_FAILED: &str = "REGISTRATION_FAILED";
pub const SQLITE_ERROR: &str = "SQLITE_ERROR";
pub const INVALID_IDENTIFIER: &str = "INVALID_IDENTIFIER";
pub const COLUMN_LIST_ERROR: &str = "COLUMN_LIST_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
