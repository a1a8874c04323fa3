//! `MatchContext` over the FTS5 extension API of one auxiliary call.

use std::ffi::c_int;

use matchcols_core::constants::MIN_FTS5_API_VERSION;
use matchcols_core::errors::AggregateError;
use matchcols_core::traits::MatchContext;
use rusqlite::ffi;

/// Borrowed view of the FTS5 match state for the current row.
///
/// Counts are read lazily so that nothing is touched before the caller has
/// validated its arguments.
pub(crate) struct Fts5MatchContext<'a> {
    api: &'a ffi::Fts5ExtensionApi,
    fts: *mut ffi::Fts5Context,
}

impl<'a> Fts5MatchContext<'a> {
    /// Validate the pointers SQLite handed to the callback.
    ///
    /// # Safety
    ///
    /// `api` and `fts` must be the pointers passed to the currently running
    /// auxiliary function, and the returned value must not outlive that call.
    pub(crate) unsafe fn new(
        api: *const ffi::Fts5ExtensionApi,
        fts: *mut ffi::Fts5Context,
    ) -> Result<Self, AggregateError> {
        // SAFETY: caller guarantees `api` is null or valid for 'a.
        let api = unsafe { api.as_ref() }.ok_or_else(|| unavailable("null extension API"))?;
        if fts.is_null() {
            return Err(unavailable("null FTS5 context"));
        }
        if api.iVersion < MIN_FTS5_API_VERSION {
            return Err(unavailable(format!(
                "extension API version {} lacks column iteration",
                api.iVersion
            )));
        }
        if api.xColumnCount.is_none()
            || api.xPhraseCount.is_none()
            || api.xPhraseFirstColumn.is_none()
            || api.xPhraseNextColumn.is_none()
        {
            return Err(unavailable("extension API is missing column iteration entry points"));
        }
        Ok(Self { api, fts })
    }
}

impl MatchContext for Fts5MatchContext<'_> {
    type Columns<'c>
        = Fts5PhraseColumns<'c>
    where
        Self: 'c;

    fn column_count(&self) -> usize {
        // SAFETY: entry point checked in `new`; `fts` is live for this call.
        let count = self
            .api
            .xColumnCount
            .map_or(0, |column_count| unsafe { column_count(self.fts) });
        usize::try_from(count).unwrap_or(0)
    }

    fn phrase_count(&self) -> usize {
        // SAFETY: as above.
        let count = self
            .api
            .xPhraseCount
            .map_or(0, |phrase_count| unsafe { phrase_count(self.fts) });
        usize::try_from(count).unwrap_or(0)
    }

    fn phrase_columns(&self, phrase: usize) -> Result<Self::Columns<'_>, AggregateError> {
        let first_column = self
            .api
            .xPhraseFirstColumn
            .ok_or_else(|| unavailable("xPhraseFirstColumn missing"))?;
        let phrase_index = c_int::try_from(phrase).map_err(|_| AggregateError::PhraseUnavailable {
            phrase,
            code: ffi::SQLITE_RANGE,
        })?;

        // SAFETY: Fts5PhraseIter is a pair of raw pointers; all-zero is a
        // valid "not started" value and FTS5 overwrites it below.
        let mut iter: ffi::Fts5PhraseIter = unsafe { std::mem::zeroed() };
        let mut current: c_int = -1;
        // SAFETY: `fts` is live for this call and both out-pointers are valid.
        let rc = unsafe { first_column(self.fts, phrase_index, &mut iter, &mut current) };
        if rc != ffi::SQLITE_OK {
            return Err(AggregateError::PhraseUnavailable { phrase, code: rc });
        }

        Ok(Fts5PhraseColumns {
            api: self.api,
            fts: self.fts,
            iter,
            current,
        })
    }
}

/// Columns containing one phrase; FTS5 signals exhaustion with a negative index.
pub(crate) struct Fts5PhraseColumns<'c> {
    api: &'c ffi::Fts5ExtensionApi,
    fts: *mut ffi::Fts5Context,
    iter: ffi::Fts5PhraseIter,
    current: c_int,
}

impl Iterator for Fts5PhraseColumns<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.current < 0 {
            return None;
        }
        let column = self.current;
        match self.api.xPhraseNextColumn {
            // SAFETY: `iter` was initialised by xPhraseFirstColumn on the
            // same context and has not been advanced past its end.
            Some(next_column) => unsafe { next_column(self.fts, &mut self.iter, &mut self.current) },
            None => self.current = -1,
        }
        Some(i64::from(column))
    }
}

fn unavailable(reason: impl Into<String>) -> AggregateError {
    AggregateError::ContextUnavailable {
        reason: reason.into(),
    }
}
