//! Connections with `matched_columns` registered and pragmas applied.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use matchcols_core::config::SqliteConfig;
use matchcols_core::errors::SetupError;
use rusqlite::Connection;
use tracing::debug;

use crate::function::{register_matched_columns, FunctionStats, StatsSnapshot};

/// An SQLite connection ready for FTS5 queries using `matched_columns`.
pub struct SearchConnection {
    conn: Connection,
    stats: Arc<FunctionStats>,
    path: Option<PathBuf>,
}

impl SearchConnection {
    /// Open a database file, apply pragmas, register the function.
    pub fn open(path: &Path, config: &SqliteConfig) -> Result<Self, SetupError> {
        let conn = Connection::open(path).map_err(to_setup_err)?;
        apply_pragmas(&conn, config, true)?;
        let stats = register_matched_columns(&conn)?;
        Ok(Self {
            conn,
            stats,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database. Journal mode is left at SQLite's default.
    pub fn open_in_memory(config: &SqliteConfig) -> Result<Self, SetupError> {
        let conn = Connection::open_in_memory().map_err(to_setup_err)?;
        apply_pragmas(&conn, config, false)?;
        let stats = register_matched_columns(&conn)?;
        Ok(Self {
            conn,
            stats,
            path: None,
        })
    }

    /// Register the function on a connection opened elsewhere.
    /// Pragmas are left untouched.
    pub fn from_connection(conn: Connection) -> Result<Self, SetupError> {
        let stats = register_matched_columns(&conn)?;
        let path = conn
            .path()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Ok(Self { conn, stats, path })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Call counters of the registered function.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn into_inner(self) -> Connection {
        self.conn
    }
}

/// Apply configured pragmas. Journal mode only applies to file databases.
pub fn apply_pragmas(
    conn: &Connection,
    config: &SqliteConfig,
    file_backed: bool,
) -> Result<(), SetupError> {
    conn.busy_timeout(Duration::from_millis(u64::from(
        config.effective_busy_timeout_ms(),
    )))
    .map_err(to_setup_err)?;
    conn.pragma_update(None, "cache_size", config.effective_cache_size())
        .map_err(to_setup_err)?;

    if file_backed {
        let requested = config.effective_journal_mode();
        let active: String = conn
            .pragma_update_and_check(None, "journal_mode", &requested, |row| row.get(0))
            .map_err(to_setup_err)?;
        debug!(requested = %requested, active = %active, "journal mode set");
    }
    Ok(())
}

/// Read back the active journal mode.
pub fn journal_mode(conn: &Connection) -> Result<String, SetupError> {
    conn.pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(to_setup_err)
}

fn to_setup_err(err: rusqlite::Error) -> SetupError {
    SetupError::Sqlite {
        message: err.to_string(),
    }
}
