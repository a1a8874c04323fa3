//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging from `MATCHCOLS_LOG`.
///
/// Format: `MATCHCOLS_LOG=matchcols_fts5=debug,matchcols_core=trace`.
/// Falls back to `matchcols=info` when unset or invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize logging with an explicit directive string.
pub fn init_tracing_with_filter(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize logging from config; `MATCHCOLS_LOG` still wins when set.
pub fn init_tracing_from_config(config: &LoggingConfig) {
    match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => install(filter),
        Err(_) => init_tracing_with_filter(config.effective_filter()),
    }
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
