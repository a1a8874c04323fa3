//! # matchcols-fts5
//!
//! SQLite FTS5 binding for the `matched_columns` auxiliary function.
//! Acquires the FTS5 registration API from a `rusqlite` connection, registers
//! the function, and adapts each per-row callback to `matchcols-core`.

pub mod capability;
pub mod connection;
mod context;
pub mod function;
pub mod queries;
mod sink;

pub use capability::{registrar, Fts5Registrar};
pub use connection::SearchConnection;
pub use function::{register_matched_columns, FunctionStats, StatsSnapshot};
pub use queries::{matched_columns_for, MatchedRow};
