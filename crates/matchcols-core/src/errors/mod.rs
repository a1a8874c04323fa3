//! Error handling for matchcols.
//! One error enum per concern, `thiserror` only.

pub mod aggregate_error;
pub mod column_list_error;
pub mod config_error;
pub mod error_code;
pub mod invocation_error;
pub mod query_error;
pub mod setup_error;

pub use aggregate_error::AggregateError;
pub use column_list_error::ColumnListError;
pub use config_error::ConfigError;
pub use error_code::MatchColsErrorCode;
pub use invocation_error::InvocationError;
pub use query_error::QueryError;
pub use setup_error::SetupError;

/// Top-level error aggregating every subsystem error via `From`.
#[derive(Debug, thiserror::Error)]
pub enum MatchColsError {
    #[error("Invocation error: {0}")]
    Invocation(#[from] InvocationError),

    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<AggregateError> for MatchColsError {
    fn from(err: AggregateError) -> Self {
        Self::Invocation(InvocationError::Aggregate(err))
    }
}

impl MatchColsErrorCode for MatchColsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invocation(e) => e.error_code(),
            Self::Setup(e) => e.error_code(),
            Self::Query(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

