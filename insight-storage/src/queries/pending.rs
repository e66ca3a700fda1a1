//! Pending-record selection. A block is pending while its `*_completed`
//! flag is 0; pages follow insertion order.

use rusqlite::{params, Connection, Params};

use insight_core::errors::InsightResult;
use insight_core::models::{PendingKind, Review, ReviewScope};

use super::{row_to_review, sql_count, REVIEW_COLUMNS};
use crate::to_storage_err;

pub fn fetch_pending(
    conn: &Connection,
    scope: &ReviewScope,
    limit: usize,
    skip: usize,
) -> InsightResult<Vec<Review>> {
    let (limit, skip) = (sql_count(limit), sql_count(skip));
    match scope {
        ReviewScope::All => query_reviews(
            conn,
            "WHERE polarity_completed = 0 ORDER BY rowid LIMIT ?1 OFFSET ?2",
            params![limit, skip],
        ),
        ReviewScope::BySubject(subject_id) => query_reviews(
            conn,
            "WHERE polarity_completed = 0 AND subject_id = ?1 ORDER BY rowid LIMIT ?2 OFFSET ?3",
            params![subject_id, limit, skip],
        ),
        ReviewScope::ByCourse(course) => query_reviews(
            conn,
            "WHERE polarity_completed = 0 AND contains_ci(course_name, ?1) \
             ORDER BY rowid LIMIT ?2 OFFSET ?3",
            params![course, limit, skip],
        ),
    }
}

pub fn fetch_pending_categorization(
    conn: &Connection,
    limit: usize,
    skip: usize,
) -> InsightResult<Vec<Review>> {
    query_reviews(
        conn,
        "WHERE categorization_completed = 0 ORDER BY rowid LIMIT ?1 OFFSET ?2",
        params![sql_count(limit), sql_count(skip)],
    )
}

pub fn count_pending(conn: &Connection, kind: PendingKind) -> InsightResult<usize> {
    let sql = match kind {
        PendingKind::Polarity => "SELECT COUNT(*) FROM reviews WHERE polarity_completed = 0",
        PendingKind::Categorization => {
            "SELECT COUNT(*) FROM reviews WHERE categorization_completed = 0"
        }
    };
    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

fn query_reviews<P: Params>(conn: &Connection, tail: &str, params: P) -> InsightResult<Vec<Review>> {
    let sql = format!("SELECT {REVIEW_COLUMNS} FROM reviews {tail}");
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, row_to_review)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
