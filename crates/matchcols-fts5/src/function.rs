//! The `matched_columns` FTS5 auxiliary function.
//!
//! ```sql
//! SELECT rowid, matched_columns(docs) FROM docs WHERE docs MATCH 'rust OR sqlite';
//! -- 1 | 0,2
//! ```

use std::ffi::{c_int, c_void, CStr};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use matchcols_core::constants::FUNCTION_NAME;
use matchcols_core::errors::{InvocationError, SetupError};
use matchcols_core::aggregate::aggregate;
use matchcols_core::invocation::{check_arity, deliver};
use rusqlite::{ffi, Connection};
use serde::Serialize;
use tracing::{error, info};

use crate::capability::{registrar, Fts5Registrar};
use crate::context::Fts5MatchContext;
use crate::sink::SqliteResultSink;

const FUNCTION_NAME_C: &CStr = c"matched_columns";
const PANIC_MESSAGE: &CStr = c"matched_columns: internal panic";

/// Per-registration call counters.
#[derive(Debug, Default)]
pub struct FunctionStats {
    invocations: AtomicU64,
    failures: AtomicU64,
}

/// Point-in-time copy of [`FunctionStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub invocations: u64,
    pub failures: u64,
}

impl FunctionStats {
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            invocations: self.invocations.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    fn record(&self, failed: bool) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
        if failed {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Fts5Registrar<'_> {
    /// Register `matched_columns` as a zero-argument auxiliary function.
    ///
    /// The returned stats handle stays valid after the connection closes;
    /// SQLite drops its own reference when it destroys the function.
    pub fn register_matched_columns(&self) -> Result<Arc<FunctionStats>, SetupError> {
        let api = self.api.as_ptr();
        // SAFETY: `api` points at FTS5's global struct, live while the
        // borrowed connection is open.
        let create_function = unsafe { (*api).xCreateFunction }.ok_or_else(|| {
            SetupError::Fts5Unavailable {
                reason: "xCreateFunction missing".to_string(),
            }
        })?;

        let stats = Arc::new(FunctionStats::default());
        let user_data = Arc::into_raw(Arc::clone(&stats)).cast_mut().cast::<c_void>();

        // SAFETY: FTS5 copies the name; `user_data` is released by
        // `release_stats` when the function is destroyed.
        let rc = unsafe {
            create_function(
                api,
                FUNCTION_NAME_C.as_ptr(),
                user_data,
                Some(matched_columns_callback),
                Some(release_stats),
            )
        };
        if rc != ffi::SQLITE_OK {
            // FTS5 does not call xDestroy when registration fails.
            // SAFETY: `user_data` came from Arc::into_raw above and was not
            // handed over.
            unsafe { release_stats(user_data) };
            return Err(SetupError::RegistrationFailed {
                function: FUNCTION_NAME,
                code: rc,
            });
        }

        info!(
            function = FUNCTION_NAME,
            api_version = self.api_version(),
            "registered FTS5 auxiliary function"
        );
        Ok(stats)
    }
}

/// Acquire the FTS5 API on `conn` and register `matched_columns`.
pub fn register_matched_columns(conn: &Connection) -> Result<Arc<FunctionStats>, SetupError> {
    registrar(conn)?.register_matched_columns()
}

/// Entry point FTS5 calls once per matched row.
unsafe extern "C" fn matched_columns_callback(
    api: *const ffi::Fts5ExtensionApi,
    fts: *mut ffi::Fts5Context,
    ctx: *mut ffi::sqlite3_context,
    n_val: c_int,
    _ap_val: *mut *mut ffi::sqlite3_value,
) {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        // SAFETY: SQLite passes pointers that are valid for this call.
        let outcome = unsafe { evaluate_row(api, fts, n_val) };
        // SAFETY: as above.
        if let Some(stats) = unsafe { stats_for(api, fts) } {
            stats.record(outcome.is_err());
        }
        // SAFETY: `ctx` is the live result context of this call.
        let mut sink = unsafe { SqliteResultSink::new(ctx) };
        deliver(&mut sink, outcome);
    }));

    if result.is_err() {
        error!(function = FUNCTION_NAME, "panic in auxiliary function");
        // SAFETY: `ctx` is live; the message is a 'static C string.
        unsafe { ffi::sqlite3_result_error(ctx, PANIC_MESSAGE.as_ptr(), -1) };
    }
}

/// # Safety
///
/// Pointers must come from the running auxiliary function call.
unsafe fn evaluate_row(
    api: *const ffi::Fts5ExtensionApi,
    fts: *mut ffi::Fts5Context,
    n_val: c_int,
) -> Result<String, InvocationError> {
    // Arity goes first: a bad call must not read the match context.
    check_arity(usize::try_from(n_val).unwrap_or(usize::MAX))?;
    // SAFETY: forwarded from the caller.
    let ctx = unsafe { Fts5MatchContext::new(api, fts) }?;
    Ok(aggregate(&ctx)?)
}

/// # Safety
///
/// Pointers must come from the running auxiliary function call, which must
/// belong to a function registered by `register_matched_columns`.
unsafe fn stats_for<'a>(
    api: *const ffi::Fts5ExtensionApi,
    fts: *mut ffi::Fts5Context,
) -> Option<&'a FunctionStats> {
    // SAFETY: forwarded from the caller.
    let api = unsafe { api.as_ref() }?;
    let user_data = api.xUserData?;
    // SAFETY: the user data is the Arc<FunctionStats> installed at
    // registration, kept alive until SQLite calls `release_stats`.
    unsafe { user_data(fts).cast::<FunctionStats>().cast_const().as_ref() }
}

unsafe extern "C" fn release_stats(user_data: *mut c_void) {
    if !user_data.is_null() {
        // SAFETY: `user_data` came from Arc::into_raw in registration and is
        // released exactly once.
        drop(unsafe { Arc::from_raw(user_data.cast::<FunctionStats>().cast_const()) });
    }
}
