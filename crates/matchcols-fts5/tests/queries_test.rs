//! Tests for the query helpers.

use matchcols_core::errors::QueryError;
use matchcols_fts5::{matched_columns_for, register_matched_columns, MatchedRow};
use rusqlite::Connection;

fn library() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    register_matched_columns(&conn).unwrap();
    conn.execute_batch(
        "CREATE VIRTUAL TABLE library USING fts5(title, author, summary);
         INSERT INTO library(rowid, title, author, summary) VALUES
            (1, 'The Rust Programming Language', 'Klabnik', 'ownership and borrowing'),
            (2, 'Programming Rust', 'Blandy', 'systems programming with rust'),
            (3, 'Using SQLite', 'Kreibich', 'embedded databases');",
    )
    .unwrap();
    conn
}

#[test]
fn returns_rows_in_rowid_order_with_parsed_columns() {
    let conn = library();
    let rows = matched_columns_for(&conn, "library", "rust").unwrap();
    let columns: Vec<(i64, Vec<usize>)> = rows
        .into_iter()
        .map(|MatchedRow { rowid, columns }| (rowid, columns.into_vec()))
        .collect();
    assert_eq!(columns, vec![(1, vec![0]), (2, vec![0, 2])]);
}

#[test]
fn no_match_is_an_empty_result() {
    let conn = library();
    assert!(matched_columns_for(&conn, "library", "cobol").unwrap().is_empty());
}

#[test]
fn invalid_table_name_is_rejected_before_querying() {
    let conn = library();
    let err = matched_columns_for(&conn, "library; DROP TABLE library", "rust").unwrap_err();
    assert!(matches!(err, QueryError::InvalidIdentifier { .. }));
}

#[test]
fn bad_match_expression_is_a_sqlite_error() {
    let conn = library();
    let err = matched_columns_for(&conn, "library", "\"unterminated").unwrap_err();
    assert!(matches!(err, QueryError::Sqlite { .. }));
}

#[test]
fn missing_table_is_a_sqlite_error() {
    let conn = library();
    let err = matched_columns_for(&conn, "nowhere", "rust").unwrap_err();
    assert!(matches!(err, QueryError::Sqlite { .. }));
}
