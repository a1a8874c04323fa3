//! Errors from acquiring the host capability and registering the function.

use super::error_code::{self, MatchColsErrorCode};

/// Setup-time failures. These never originate in the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("FTS5 extension API unavailable: {reason}")]
    Fts5Unavailable { reason: String },

    #[error("FTS5 API version {found} is too old, need at least {required}")]
    ApiTooOld { found: i32, required: i32 },

    #[error("registering {function} failed with code {code}")]
    RegistrationFailed { function: &'static str, code: i32 },

    #[error("SQLite error: {message}")]
    Sqlite { message: String },
}

impl MatchColsErrorCode for SetupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Fts5Unavailable { .. } | Self::ApiTooOld { .. } => error_code::FTS5_UNAVAILABLE,
            Self::RegistrationFailed { .. } => error_code::REGISTRATION_FAILED,
            Self::Sqlite { .. } => error_code::SQLITE_ERROR,
        }
    }
}
