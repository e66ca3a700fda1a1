//! Result-block writes. Block JSON and its completion flag change in the
//! same statement.

use rusqlite::{params, Connection};

use insight_core::errors::InsightResult;
use insight_core::models::{
    CategorizationBlock, CategorizationResult, PolarityBlock, PolarityResult,
};

use crate::to_storage_err;

/// Returns whether a row was modified; `false` for an unknown id.
pub fn update_polarity(
    conn: &Connection,
    review_id: &str,
    result: &PolarityResult,
) -> InsightResult<bool> {
    let block = serde_json::to_string(&PolarityBlock::completed(result.clone()))?;
    let changed = conn
        .execute(
            "UPDATE reviews SET polarity = ?1, polarity_completed = 1 WHERE id = ?2",
            params![block, review_id],
        )
        .map_err(|e| to_storage_err(format!("update_polarity {review_id}: {e}")))?;
    Ok(changed > 0)
}

/// Returns whether a row was modified; `false` for an unknown id.
pub fn update_categorization(
    conn: &Connection,
    review_id: &str,
    result: &CategorizationResult,
) -> InsightResult<bool> {
    let block = serde_json::to_string(&CategorizationBlock::completed(result.clone()))?;
    let changed = conn
        .execute(
            "UPDATE reviews SET categorization = ?1, categorization_completed = 1 WHERE id = ?2",
            params![block, review_id],
        )
        .map_err(|e| to_storage_err(format!("update_categorization {review_id}: {e}")))?;
    Ok(changed > 0)
}
