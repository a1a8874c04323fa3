//! Property tests: determinism, uniqueness, subset, completeness, order law.

use std::collections::HashSet;

use proptest::prelude::*;

use matchcols_core::aggregate::{aggregate, collect_matched_columns, MatchedColumns};
use matchcols_core::traits::InMemoryMatchContext;

/// A column count plus phrases whose columns are all in range.
fn valid_match() -> impl Strategy<Value = (usize, Vec<Vec<i64>>)> {
    (1usize..300).prop_flat_map(|columns| {
        let column = 0..columns as i64;
        (
            Just(columns),
            prop::collection::vec(prop::collection::vec(column, 0..12), 0..8),
        )
    })
}

/// First-seen order under "phrases ascending, then yield order".
fn reference_order(phrases: &[Vec<i64>]) -> Vec<usize> {
    let mut seen = HashSet::new();
    phrases
        .iter()
        .flatten()
        .filter(|&&c| seen.insert(c))
        .map(|&c| c as usize)
        .collect()
}

proptest! {
    #[test]
    fn prop_deterministic((columns, phrases) in valid_match()) {
        let ctx = InMemoryMatchContext::new(columns, phrases);
        prop_assert_eq!(aggregate(&ctx).unwrap(), aggregate(&ctx).unwrap());
    }

    #[test]
    fn prop_unique_and_in_range((columns, phrases) in valid_match()) {
        let ctx = InMemoryMatchContext::new(columns, phrases);
        let list = collect_matched_columns(&ctx).unwrap();
        let distinct: HashSet<_> = list.iter().collect();
        prop_assert_eq!(distinct.len(), list.len());
        prop_assert!(list.iter().all(|&c| c < columns));
    }

    #[test]
    fn prop_complete_and_ordered((columns, phrases) in valid_match()) {
        let expected = reference_order(&phrases);
        let ctx = InMemoryMatchContext::new(columns, phrases);
        let list = collect_matched_columns(&ctx).unwrap();
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_text_parses_back_to_list((columns, phrases) in valid_match()) {
        let ctx = InMemoryMatchContext::new(columns, phrases);
        let text = aggregate(&ctx).unwrap();
        let parsed: MatchedColumns = text.parse().unwrap();
        prop_assert_eq!(parsed, collect_matched_columns(&ctx).unwrap());
        prop_assert!(!text.starts_with(',') && !text.ends_with(','));
    }

    #[test]
    fn prop_out_of_range_never_yields_text(
        columns in 1usize..50,
        offset in 0i64..1000,
        negative in any::<bool>(),
    ) {
        let bad = if negative { -1 - offset } else { columns as i64 + offset };
        let ctx = InMemoryMatchContext::new(columns, vec![vec![0], vec![bad]]);
        prop_assert!(aggregate(&ctx).is_err());
    }
}
