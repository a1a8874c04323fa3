//! SQLite connection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_CACHE_SIZE, DEFAULT_JOURNAL_MODE};

/// Pragmas applied when the FTS5 adapter opens a connection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SqliteConfig {
    /// Busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u32>,
    /// Page cache size (negative = KiB). Default: -16000.
    pub cache_size: Option<i64>,
    /// Journal mode for file-backed databases. Default: "wal".
    pub journal_mode: Option<String>,
}

impl SqliteConfig {
    pub fn effective_busy_timeout_ms(&self) -> u32 {
        self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS)
    }

    pub fn effective_cache_size(&self) -> i64 {
        self.cache_size.unwrap_or(DEFAULT_CACHE_SIZE)
    }

    /// Lower-cased journal mode.
    pub fn effective_journal_mode(&self) -> String {
        self.journal_mode
            .as_deref()
            .unwrap_or(DEFAULT_JOURNAL_MODE)
            .to_ascii_lowercase()
    }
}
