use crate::errors::AggregateError;

/// Read-only view of one matched row, as exposed by the search engine.
///
/// Column indices are yielded raw (`i64`) so the aggregator can reject values
/// outside `0..column_count()` instead of trusting the provider.
pub trait MatchContext {
    /// Lazy, finite, non-restartable sequence of the columns one phrase
    /// matches in the current row.
    type Columns<'a>: Iterator<Item = i64>
    where
        Self: 'a;

    /// Number of indexed columns in the table.
    fn column_count(&self) -> usize;

    /// Number of phrases in the current query.
    fn phrase_count(&self) -> usize;

    /// Start iterating the columns matched by `phrase`.
    fn phrase_columns(&self, phrase: usize) -> Result<Self::Columns<'_>, AggregateError>;
}
