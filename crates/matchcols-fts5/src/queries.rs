//! Query helpers that consume `matched_columns` output.

use matchcols_core::aggregate::MatchedColumns;
use matchcols_core::errors::QueryError;
use rusqlite::Connection;

/// One matched row and the columns its phrases touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRow {
    pub rowid: i64,
    pub columns: MatchedColumns,
}

/// Run `match_expr` against the FTS5 table `table` and return every matched
/// row, ordered by rowid, with its parsed column list.
///
/// `matched_columns` must already be registered on `conn`.
pub fn matched_columns_for(
    conn: &Connection,
    table: &str,
    match_expr: &str,
) -> Result<Vec<MatchedRow>, QueryError> {
    let table = quote_identifier(table)?;
    let sql = format!(
        "SELECT rowid, matched_columns({table}) FROM {table} WHERE {table} MATCH ?1 ORDER BY rowid"
    );

    let mut stmt = conn.prepare(&sql).map_err(to_query_err)?;
    let rows = stmt
        .query_map([match_expr], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(to_query_err)?;

    let mut results = Vec::new();
    for row in rows {
        let (rowid, text) = row.map_err(to_query_err)?;
        results.push(MatchedRow {
            rowid,
            columns: text.parse()?,
        });
    }
    Ok(results)
}

/// Accept only plain identifiers (`[A-Za-z_][A-Za-z0-9_]*`) and quote them.
fn quote_identifier(name: &str) -> Result<String, QueryError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(format!("\"{name}\""))
    } else {
        Err(QueryError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

fn to_query_err(err: rusqlite::Error) -> QueryError {
    QueryError::Sqlite {
        message: err.to_string(),
    }
}
