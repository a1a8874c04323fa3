//! Tests for the matchcols configuration system.

use std::sync::Mutex;

use matchcols_core::config::MatchColsConfig;
use matchcols_core::errors::ConfigError;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env_vars() {
    for key in [
        "MATCHCOLS_SQLITE_BUSY_TIMEOUT_MS",
        "MATCHCOLS_SQLITE_CACHE_SIZE",
        "MATCHCOLS_SQLITE_JOURNAL_MODE",
        "MATCHCOLS_LOGGING_FILTER",
    ] {
        std::env::remove_var(key);
    }
}

/// Points HOME at an empty directory so no real user config leaks in.
fn isolated_home() -> tempfile::TempDir {
    let home = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());
    home
}

#[test]
fn defaults_without_any_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();
    let _home = isolated_home();
    let dir = tempfile::TempDir::new().unwrap();

    let config = MatchColsConfig::load(dir.path()).unwrap();
    assert_eq!(config, MatchColsConfig::default());
    assert_eq!(config.sqlite.effective_busy_timeout_ms(), 5_000);
    assert_eq!(config.sqlite.effective_journal_mode(), "wal");
    assert_eq!(config.logging.effective_filter(), "matchcols=info");
}

#[test]
fn env_overrides_project_over_user() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();
    let home = isolated_home();
    std::fs::create_dir_all(home.path().join(".matchcols")).unwrap();
    std::fs::write(
        home.path().join(".matchcols").join("config.toml"),
        "[sqlite]\ncache_size = -2000\nbusy_timeout_ms = 100\n",
    )
    .unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("matchcols.toml"),
        "[sqlite]\nbusy_timeout_ms = 250\njournal_mode = \"DELETE\"\n",
    )
    .unwrap();
    std::env::set_var("MATCHCOLS_SQLITE_JOURNAL_MODE", "memory");

    let config = MatchColsConfig::load(dir.path()).unwrap();
    assert_eq!(config.sqlite.cache_size, Some(-2000));
    assert_eq!(config.sqlite.busy_timeout_ms, Some(250));
    assert_eq!(config.sqlite.effective_journal_mode(), "memory");

    clear_env_vars();
}

#[test]
fn invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();
    let _home = isolated_home();
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("matchcols.toml"), "[sqlite\nbroken").unwrap();

    let err = MatchColsConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_journal_mode_fails_validation() {
    let err = MatchColsConfig::from_toml("[sqlite]\njournal_mode = \"sideways\"\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "sqlite.journal_mode"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn oversized_busy_timeout_fails_validation() {
    let err = MatchColsConfig::from_toml("[sqlite]\nbusy_timeout_ms = 4000000000\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn empty_log_filter_fails_validation() {
    let err = MatchColsConfig::from_toml("[logging]\nfilter = \"  \"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn toml_roundtrip_keeps_values() {
    let config = MatchColsConfig::from_toml(
        "[sqlite]\ncache_size = -4000\n\n[logging]\nfilter = \"matchcols_fts5=debug\"\n",
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    assert_eq!(MatchColsConfig::from_toml(&text).unwrap(), config);
}
