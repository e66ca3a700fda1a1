//! Insert and read reviews.

use rusqlite::{params, Connection, OptionalExtension};

use insight_core::errors::InsightResult;
use insight_core::models::{CategorizationBlock, PolarityBlock, Review, ReviewAnalysis};

use super::{row_to_review, REVIEW_COLUMNS};
use crate::to_storage_err;

pub fn insert_review(conn: &Connection, review: &Review) -> InsightResult<()> {
    conn.execute(
        "INSERT INTO reviews (id, text, subject_id, course_name) VALUES (?1, ?2, ?3, ?4)",
        params![review.id, review.text, review.subject_id, review.course_name],
    )
    .map_err(|e| to_storage_err(format!("insert_review {}: {e}", review.id)))?;
    Ok(())
}

/// Insert many reviews atomically. Returns the number inserted.
pub fn insert_reviews(conn: &Connection, reviews: &[Review]) -> InsightResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_reviews begin: {e}")))?;

    for review in reviews {
        if let Err(e) = insert_review(&tx, review) {
            let _ = tx.rollback();
            return Err(e);
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("insert_reviews commit: {e}")))?;
    Ok(reviews.len())
}

pub fn get_review(conn: &Connection, id: &str) -> InsightResult<Option<Review>> {
    conn.query_row(
        &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?1"),
        params![id],
        row_to_review,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// A review together with whatever analysis blocks have been written for it.
pub fn get_analysis(conn: &Connection, id: &str) -> InsightResult<Option<ReviewAnalysis>> {
    let row = conn
        .query_row(
            &format!("SELECT {REVIEW_COLUMNS}, polarity, categorization FROM reviews WHERE id = ?1"),
            params![id],
            |row| {
                let review = row_to_review(row)?;
                let polarity: Option<String> = row.get(4)?;
                let categorization: Option<String> = row.get(5)?;
                Ok((review, polarity, categorization))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((review, polarity, categorization)) = row else {
        return Ok(None);
    };

    let polarity = polarity
        .map(|json| serde_json::from_str::<PolarityBlock>(&json))
        .transpose()?;
    let categorization = categorization
        .map(|json| serde_json::from_str::<CategorizationBlock>(&json))
        .transpose()?;

    Ok(Some(ReviewAnalysis {
        review,
        polarity,
        categorization,
    }))
}
