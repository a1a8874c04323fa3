//! `ResultSink` writing into an SQLite function context.

use std::ffi::{c_char, c_int};

use matchcols_core::errors::{AggregateError, InvocationError, MatchColsErrorCode};
use matchcols_core::traits::ResultSink;
use rusqlite::ffi;

pub(crate) struct SqliteResultSink {
    ctx: *mut ffi::sqlite3_context,
}

impl SqliteResultSink {
    /// # Safety
    ///
    /// `ctx` must be the result context of the currently running function
    /// call, and the sink must not outlive that call.
    pub(crate) unsafe fn new(ctx: *mut ffi::sqlite3_context) -> Self {
        Self { ctx }
    }
}

impl ResultSink for SqliteResultSink {
    fn text(&mut self, value: &str) {
        match c_int::try_from(value.len()) {
            // SAFETY: SQLITE_TRANSIENT makes SQLite copy the bytes before
            // returning, so `value` only has to live for this call. The
            // pointer of an empty str is dangling but non-null, which SQLite
            // reads as an empty text value rather than NULL.
            Ok(len) => unsafe {
                ffi::sqlite3_result_text(
                    self.ctx,
                    value.as_ptr().cast::<c_char>(),
                    len,
                    ffi::SQLITE_TRANSIENT(),
                );
            },
            // SAFETY: `ctx` is live for this call.
            Err(_) => unsafe { ffi::sqlite3_result_error_toobig(self.ctx) },
        }
    }

    fn error(&mut self, error: &InvocationError) {
        if error.is_allocation_failure() {
            // SAFETY: `ctx` is live for this call.
            unsafe { ffi::sqlite3_result_error_nomem(self.ctx) };
            return;
        }

        let message = error.coded_message();
        let len = c_int::try_from(message.len()).unwrap_or(c_int::MAX);
        // SAFETY: SQLite copies the message; `ctx` is live for this call.
        // The code is set after the message because sqlite3_result_error
        // resets it to SQLITE_ERROR.
        unsafe {
            ffi::sqlite3_result_error(self.ctx, message.as_ptr().cast::<c_char>(), len);
            ffi::sqlite3_result_error_code(self.ctx, sqlite_code(error));
        }
    }
}

/// Primary SQLite result code for an invocation failure.
pub(crate) fn sqlite_code(error: &InvocationError) -> c_int {
    match error {
        InvocationError::WrongArgumentCount { .. } => ffi::SQLITE_ERROR,
        InvocationError::Aggregate(AggregateError::Allocation { .. }) => ffi::SQLITE_NOMEM,
        InvocationError::Aggregate(AggregateError::ColumnOutOfRange { .. }) => ffi::SQLITE_INTERNAL,
        InvocationError::Aggregate(AggregateError::PhraseUnavailable { code, .. }) if *code != 0 => {
            *code
        }
        InvocationError::Aggregate(_) => ffi::SQLITE_ERROR,
    }
}
