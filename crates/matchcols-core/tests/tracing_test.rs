//! Tests for tracing initialization.

use std::sync::Mutex;

use matchcols_core::config::LoggingConfig;
use matchcols_core::tracing::{init_tracing, init_tracing_from_config, init_tracing_with_filter};

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing_with_filter("matchcols=debug");
}

#[test]
fn garbage_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("MATCHCOLS_LOG", "[[not a filter");
    init_tracing();
    std::env::remove_var("MATCHCOLS_LOG");
    init_tracing_with_filter("[[also not a filter");
}

#[test]
fn config_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    let config = LoggingConfig {
        filter: Some("matchcols_core=trace".to_string()),
    };
    init_tracing_from_config(&config);
}
