//! Acquisition of the FTS5 extension-registration API for a connection.
//!
//! SQLite hands out the `fts5_api` pointer through the `fts5()` SQL function:
//! binding a typed pointer to `SELECT fts5(?1)` and stepping the statement
//! makes FTS5 write its API pointer into the bound slot.

use std::ffi::{c_void, CStr};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use matchcols_core::constants::MIN_FTS5_API_VERSION;
use matchcols_core::errors::SetupError;
use rusqlite::{ffi, Connection};
use tracing::debug;

const PROBE_SQL: &CStr = c"SELECT fts5(?1)";
const FTS5_API_POINTER_TYPE: &CStr = c"fts5_api_ptr";

/// Registration capability for one connection.
///
/// Borrows the connection: the API pointer is only valid while it stays open.
pub struct Fts5Registrar<'conn> {
    pub(crate) api: NonNull<ffi::fts5_api>,
    version: i32,
    _conn: PhantomData<&'conn Connection>,
}

impl Fts5Registrar<'_> {
    /// FTS5 API version reported by the host.
    pub fn api_version(&self) -> i32 {
        self.version
    }
}

impl std::fmt::Debug for Fts5Registrar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fts5Registrar")
            .field("api_version", &self.version)
            .finish_non_exhaustive()
    }
}

/// Look up the FTS5 registration API on `conn`.
pub fn registrar(conn: &Connection) -> Result<Fts5Registrar<'_>, SetupError> {
    // SAFETY: the handle is only used for the duration of this function,
    // while `conn` is borrowed.
    let db = unsafe { conn.handle() };
    let mut api: *mut ffi::fts5_api = ptr::null_mut();
    let mut stmt: *mut ffi::sqlite3_stmt = ptr::null_mut();

    // SAFETY: `db` is a live connection; PROBE_SQL is NUL-terminated.
    let rc = unsafe { ffi::sqlite3_prepare_v2(db, PROBE_SQL.as_ptr(), -1, &mut stmt, ptr::null_mut()) };
    let failure = if rc == ffi::SQLITE_OK {
        // SAFETY: `stmt` was just prepared; `api` outlives the step, and the
        // pointer type tag is a 'static C string as sqlite3_bind_pointer requires.
        unsafe {
            ffi::sqlite3_bind_pointer(
                stmt,
                1,
                ptr::addr_of_mut!(api).cast::<c_void>(),
                FTS5_API_POINTER_TYPE.as_ptr(),
                None,
            );
            ffi::sqlite3_step(stmt);
        }
        None
    } else {
        // SAFETY: sqlite3_errmsg returns a NUL-terminated string owned by `db`.
        Some(unsafe { CStr::from_ptr(ffi::sqlite3_errmsg(db)) }.to_string_lossy().into_owned())
    };
    // SAFETY: finalizing a null statement is a no-op.
    unsafe { ffi::sqlite3_finalize(stmt) };

    let api = NonNull::new(api).ok_or_else(|| SetupError::Fts5Unavailable {
        reason: failure.unwrap_or_else(|| "fts5() did not return an API pointer".to_string()),
    })?;

    // SAFETY: FTS5 returned a pointer to its global API struct, valid while
    // the connection is open.
    let version = unsafe { api.as_ref().iVersion };
    if version < MIN_FTS5_API_VERSION {
        return Err(SetupError::ApiTooOld {
            found: version,
            required: MIN_FTS5_API_VERSION,
        });
    }

    debug!(api_version = version, "acquired FTS5 API");
    Ok(Fts5Registrar {
        api,
        version,
        _conn: PhantomData,
    })
}
