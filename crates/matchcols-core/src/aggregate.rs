//! Column-match aggregation.
//!
//! Walks every phrase of a matched row, in ascending phrase order and then in
//! the provider's yield order, and records each column the first time it is
//! seen. The result is rendered as `"0,3,7"`; an empty match renders as `""`.

use std::collections::HashSet;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::constants::{COLUMN_SEPARATOR, MAX_INDEX_DIGITS};
use crate::errors::{AggregateError, ColumnListError};
use crate::traits::MatchContext;

/// Per-call record of which columns have already been emitted.
///
/// Every slot starts out false and, once set, stays set for the lifetime of
/// the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSeenSet {
    seen: Vec<bool>,
}

impl ColumnSeenSet {
    /// Allocate a set covering `0..column_count`, all unseen.
    pub fn new(column_count: usize) -> Result<Self, AggregateError> {
        let mut seen = Vec::new();
        seen.try_reserve_exact(column_count)
            .map_err(|_| AggregateError::Allocation {
                what: "column seen set",
                requested: column_count,
            })?;
        seen.resize(column_count, false);
        Ok(Self { seen })
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, column: usize) -> bool {
        self.seen.get(column).copied().unwrap_or(false)
    }

    /// Mark `column` as seen. Returns true only on the first sighting.
    /// Columns outside the set are never recorded.
    pub fn insert(&mut self, column: usize) -> bool {
        match self.seen.get_mut(column) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }
}

/// Ordered, duplicate-free list of matched column indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedColumns {
    columns: Vec<usize>,
}

impl MatchedColumns {
    pub fn as_slice(&self) -> &[usize] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.columns.iter()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.columns
    }
}

impl fmt::Display for MatchedColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, column) in self.columns.iter().enumerate() {
            if position > 0 {
                f.write_char(COLUMN_SEPARATOR)?;
            }
            write!(f, "{column}")?;
        }
        Ok(())
    }
}

impl FromStr for MatchedColumns {
    type Err = ColumnListError;

    /// Parse the text produced by [`aggregate`]. Entries must be plain
    /// decimal digits; signs, whitespace and repeats are rejected.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Ok(Self::default());
        }

        let mut columns = Vec::new();
        let mut seen = HashSet::new();
        for (position, entry) in text.split(COLUMN_SEPARATOR).enumerate() {
            let invalid = || ColumnListError::InvalidEntry {
                entry: entry.to_string(),
                position,
            };
            if entry.is_empty() || !entry.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let column: usize = entry.parse().map_err(|_| invalid())?;
            if !seen.insert(column) {
                return Err(ColumnListError::DuplicateColumn { column });
            }
            columns.push(column);
        }
        Ok(Self { columns })
    }
}

impl<'a> IntoIterator for &'a MatchedColumns {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Collect the distinct matched columns in first-seen order.
pub fn collect_matched_columns<C>(ctx: &C) -> Result<MatchedColumns, AggregateError>
where
    C: MatchContext + ?Sized,
{
    let mut columns = Vec::new();
    visit_first_seen(ctx, |column| {
        columns
            .try_reserve(1)
            .map_err(|_| AggregateError::Allocation {
                what: "matched column list",
                requested: columns.len().saturating_add(1) * std::mem::size_of::<usize>(),
            })?;
        columns.push(column);
        Ok(())
    })?;
    Ok(MatchedColumns { columns })
}

/// Render the distinct matched columns as comma-separated text.
///
/// Produces the same text as `collect_matched_columns(ctx)?.to_string()`
/// without the intermediate list.
pub fn aggregate<C>(ctx: &C) -> Result<String, AggregateError>
where
    C: MatchContext + ?Sized,
{
    let mut text = String::new();
    visit_first_seen(ctx, |column| append_column(&mut text, column))?;
    Ok(text)
}

/// Drive the traversal, calling `on_first` once per distinct column.
fn visit_first_seen<C, F>(ctx: &C, mut on_first: F) -> Result<(), AggregateError>
where
    C: MatchContext + ?Sized,
    F: FnMut(usize) -> Result<(), AggregateError>,
{
    let column_count = ctx.column_count();
    let phrase_count = ctx.phrase_count();
    if column_count == 0 || phrase_count == 0 {
        return Ok(());
    }

    let mut seen = ColumnSeenSet::new(column_count)?;
    for phrase in 0..phrase_count {
        for raw in ctx.phrase_columns(phrase)? {
            let column = usize::try_from(raw)
                .ok()
                .filter(|&column| column < column_count)
                .ok_or(AggregateError::ColumnOutOfRange {
                    phrase,
                    column: raw,
                    column_count,
                })?;
            if seen.insert(column) {
                on_first(column)?;
            }
        }
    }
    Ok(())
}

fn append_column(text: &mut String, column: usize) -> Result<(), AggregateError> {
    let needed = MAX_INDEX_DIGITS + COLUMN_SEPARATOR.len_utf8();
    text.try_reserve(needed)
        .map_err(|_| AggregateError::Allocation {
            what: "column list text",
            requested: text.len().saturating_add(needed),
        })?;
    if !text.is_empty() {
        text.push(COLUMN_SEPARATOR);
    }
    write!(text, "{column}").map_err(|_| AggregateError::Allocation {
        what: "column list text",
        requested: text.len().saturating_add(needed),
    })
}
