use std::sync::Arc;

use crate::errors::InsightResult;
use crate::models::{CategorizationResult, PendingKind, PolarityResult, Review, ReviewScope};

/// Record store consumed by the pipeline.
///
/// "Pending" is decided here, from the `completed` flag of each result block;
/// callers never recompute it.
pub trait IReviewGateway: Send + Sync {
    /// Reviews whose polarity block is not completed, narrowed by `scope`.
    fn fetch_pending(
        &self,
        scope: &ReviewScope,
        limit: usize,
        skip: usize,
    ) -> InsightResult<Vec<Review>>;

    /// Reviews whose categorization block is not completed.
    fn fetch_pending_categorization(&self, limit: usize, skip: usize)
        -> InsightResult<Vec<Review>>;

    /// Persist a polarity block. `Ok(false)` means no record was modified.
    fn update_polarity(&self, review_id: &str, result: &PolarityResult) -> InsightResult<bool>;

    /// Persist a categorization block. `Ok(false)` means no record was modified.
    fn update_categorization(
        &self,
        review_id: &str,
        result: &CategorizationResult,
    ) -> InsightResult<bool>;

    /// Number of reviews still pending for the given block.
    fn count_pending(&self, kind: PendingKind) -> InsightResult<usize>;
}

impl<T: IReviewGateway + ?Sized> IReviewGateway for Arc<T> {
    fn fetch_pending(
        &self,
        scope: &ReviewScope,
        limit: usize,
        skip: usize,
    ) -> InsightResult<Vec<Review>> {
        (**self).fetch_pending(scope, limit, skip)
    }

    fn fetch_pending_categorization(
        &self,
        limit: usize,
        skip: usize,
    ) -> InsightResult<Vec<Review>> {
        (**self).fetch_pending_categorization(limit, skip)
    }

    fn update_polarity(&self, review_id: &str, result: &PolarityResult) -> InsightResult<bool> {
        (**self).update_polarity(review_id, result)
    }

    fn update_categorization(
        &self,
        review_id: &str,
        result: &CategorizationResult,
    ) -> InsightResult<bool> {
        (**self).update_categorization(review_id, result)
    }

    fn count_pending(&self, kind: PendingKind) -> InsightResult<usize> {
        (**self).count_pending(kind)
    }
}
