//! Persisting stage: per-record writes, in parallel, never retried.

use rayon::prelude::*;
use tracing::warn;

use insight_core::errors::InsightResult;
use insight_core::models::{RecordFailure, Review};
use insight_core::traits::IReviewGateway;

use super::score::ScoredReview;

/// Write results for every review. Returns the records that did not make it.
///
/// A record whose classification failed is not written at all. Otherwise both
/// blocks are written and the record succeeds only if both writes were
/// acknowledged.
pub fn persist_results<G: IReviewGateway>(
    gateway: &G,
    reviews: &[Review],
    scored: Vec<ScoredReview>,
) -> Vec<RecordFailure> {
    reviews
        .par_iter()
        .zip(scored.into_par_iter())
        .filter_map(|(review, scored)| {
            persist_one(gateway, review, scored).err().map(|reason| {
                warn!(review_id = %review.id, %reason, "review not persisted");
                RecordFailure {
                    review_id: review.id.clone(),
                    reason,
                }
            })
        })
        .collect()
}

fn persist_one<G: IReviewGateway>(
    gateway: &G,
    review: &Review,
    scored: ScoredReview,
) -> Result<(), String> {
    let polarity = scored
        .polarity
        .map_err(|e| format!("classification failed: {e}"))?;

    let polarity_write = gateway.update_polarity(&review.id, &polarity);
    let categorization_write = gateway.update_categorization(&review.id, &scored.categorization);

    let problems: Vec<String> = [
        ("polarity", polarity_write),
        ("categorization", categorization_write),
    ]
    .into_iter()
    .filter_map(|(block, outcome)| write_problem(block, outcome))
    .collect();

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems.join("; "))
    }
}

pub(crate) fn write_problem(block: &str, outcome: InsightResult<bool>) -> Option<String> {
    match outcome {
        Ok(true) => None,
        Ok(false) => Some(format!("{block} write not acknowledged")),
        Err(e) => Some(format!("{block} write failed: {e}")),
    }
}
