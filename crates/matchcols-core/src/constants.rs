//! Shared constants for matchcols.

/// Name the auxiliary function is registered under.
pub const FUNCTION_NAME: &str = "matched_columns";

/// Number of arguments the auxiliary function accepts.
pub const EXPECTED_ARG_COUNT: usize = 0;

/// Separator between column indices in the rendered list.
pub const COLUMN_SEPARATOR: char = ',';

/// Upper bound on the decimal width of one rendered column index.
/// `usize::MAX` on 64-bit targets has 20 digits.
pub const MAX_INDEX_DIGITS: usize = 20;

/// Minimum FTS5 extension API version exposing per-phrase column iteration.
pub const MIN_FTS5_API_VERSION: i32 = 2;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "matchcols.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "MATCHCOLS_LOG";

/// Tracing filter used when `MATCHCOLS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "matchcols=info";

// ---- SQLite connection defaults ----

/// Default busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

/// Default page cache size (negative = KiB).
pub const DEFAULT_CACHE_SIZE: i64 = -16_000;

/// Default journal mode for file-backed databases.
pub const DEFAULT_JOURNAL_MODE: &str = "wal";

/// Journal modes accepted by `PRAGMA journal_mode`.
pub const JOURNAL_MODES: [&str; 6] = ["delete", "truncate", "persist", "memory", "wal", "off"];
