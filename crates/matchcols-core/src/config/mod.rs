//! Configuration system for matchcols.
//! TOML-based, layered: env > project > user > defaults.

pub mod logging_config;
pub mod matchcols_config;
pub mod sqlite_config;

pub use logging_config::LoggingConfig;
pub use matchcols_config::MatchColsConfig;
pub use sqlite_config::SqliteConfig;
