//! SQL for the reviews table, one module per concern.

pub mod pending;
pub mod report;
pub mod results;
pub mod review_crud;

use rusqlite::Row;

use insight_core::models::Review;

const REVIEW_COLUMNS: &str = "id, text, subject_id, course_name";

/// Map a row selected with [`REVIEW_COLUMNS`].
fn row_to_review(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        text: row.get(1)?,
        subject_id: row.get(2)?,
        course_name: row.get(3)?,
    })
}

/// SQLite takes signed limits; anything past `i64::MAX` means "no limit".
fn sql_count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
