//! Property tests: FTS5 output agrees with a direct scan of the documents.

use std::collections::HashSet;

use proptest::prelude::*;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use matchcols_fts5::{matched_columns_for, register_matched_columns};

const VOCAB: [&str; 5] = ["alpha", "bravo", "charlie", "delta", "echo"];

/// `rows[r][c]` lists the vocabulary words in column `c` of row `r`.
type Corpus = Vec<Vec<Vec<usize>>>;

fn corpus() -> impl Strategy<Value = (usize, Corpus)> {
    (1usize..6).prop_flat_map(|columns| {
        (
            Just(columns),
            prop::collection::vec(
                prop::collection::vec(prop::collection::vec(0..VOCAB.len(), 0..4), columns),
                1..6,
            ),
        )
    })
}

fn query_terms() -> impl Strategy<Value = Vec<usize>> {
    prop::sample::subsequence((0..VOCAB.len()).collect::<Vec<_>>(), 1..=3).prop_shuffle()
}

fn load(columns: usize, rows: &Corpus) -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    register_matched_columns(&conn).unwrap();

    let names: Vec<String> = (0..columns).map(|c| format!("c{c}")).collect();
    conn.execute_batch(&format!(
        "CREATE VIRTUAL TABLE corpus USING fts5({});",
        names.join(", ")
    ))
    .unwrap();

    let placeholders = vec!["?"; columns + 1].join(", ");
    let sql = format!(
        "INSERT INTO corpus(rowid, {}) VALUES ({placeholders})",
        names.join(", ")
    );
    for (index, row) in rows.iter().enumerate() {
        let mut values = vec![Value::Integer(index as i64 + 1)];
        values.extend(row.iter().map(|cell| {
            Value::Text(
                cell.iter()
                    .map(|&w| VOCAB[w])
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        }));
        conn.execute(&sql, params_from_iter(values)).unwrap();
    }
    conn
}

/// Expected (rowid, columns) by scanning cells: phrases in query order,
/// columns ascending within a phrase, first sighting wins.
fn expected(rows: &Corpus, terms: &[usize]) -> Vec<(i64, Vec<usize>)> {
    let mut out = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for &term in terms {
            for (column, cell) in row.iter().enumerate() {
                if cell.contains(&term) && seen.insert(column) {
                    columns.push(column);
                }
            }
        }
        if !columns.is_empty() {
            out.push((index as i64 + 1, columns));
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_fts5_matches_direct_scan((columns, rows) in corpus(), terms in query_terms()) {
        let conn = load(columns, &rows);
        let query = terms
            .iter()
            .map(|&t| VOCAB[t])
            .collect::<Vec<_>>()
            .join(" OR ");

        let actual: Vec<(i64, Vec<usize>)> = matched_columns_for(&conn, "corpus", &query)
            .unwrap()
            .into_iter()
            .map(|row| (row.rowid, row.columns.into_vec()))
            .collect();

        prop_assert_eq!(actual, expected(&rows, &terms));
    }
}
