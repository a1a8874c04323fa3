//! # matchcols-core
//!
//! Engine-agnostic core of the `matched_columns` auxiliary function.
//! Aggregates the columns touched by the phrases of a full-text match into a
//! deduplicated, comma-separated list, and defines the seams a host engine
//! plugs into: `MatchContext` for reading matches, `ResultSink` for reporting.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod errors;
pub mod invocation;
pub mod traits;
pub mod tracing;

pub use aggregate::{aggregate, collect_matched_columns, ColumnSeenSet, MatchedColumns};
pub use config::MatchColsConfig;
pub use errors::{AggregateError, InvocationError, MatchColsError};
pub use invocation::{check_arity, deliver, evaluate};
pub use traits::{InMemoryMatchContext, MatchContext, ResultSink};
