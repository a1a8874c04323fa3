use super::MatchContext;
use crate::errors::AggregateError;

/// `MatchContext` over matches already held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryMatchContext {
    column_count: usize,
    phrases: Vec<Vec<i64>>,
}

impl InMemoryMatchContext {
    /// `phrases[i]` lists the columns phrase `i` matches, in yield order.
    pub fn new(column_count: usize, phrases: Vec<Vec<i64>>) -> Self {
        Self {
            column_count,
            phrases,
        }
    }
}

impl MatchContext for InMemoryMatchContext {
    type Columns<'a>
        = std::iter::Copied<std::slice::Iter<'a, i64>>
    where
        Self: 'a;

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    fn phrase_columns(&self, phrase: usize) -> Result<Self::Columns<'_>, AggregateError> {
        self.phrases
            .get(phrase)
            .map(|columns| columns.iter().copied())
            .ok_or(AggregateError::PhraseUnavailable { phrase, code: -1 })
    }
}
