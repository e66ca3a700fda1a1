//! Categorization backfill: lexicon-only pass over reviews whose
//! categorization block is still pending.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use insight_core::errors::InsightResult;
use insight_core::models::{RecordFailure, RunSummary};
use insight_core::traits::IReviewGateway;

use crate::engine::Processor;
use crate::pipeline::persist::write_problem;

impl<G: IReviewGateway> Processor<G> {
    /// Categorize up to `limit` pending reviews, `batch_size` per page.
    ///
    /// Successfully written reviews leave the pending set, so each page is
    /// read past only the reviews that failed earlier in this backfill.
    ///
    /// # Errors
    /// A failed page fetch aborts the backfill.
    pub fn run_categorization_backfill(
        &self,
        limit: usize,
        batch_size: usize,
    ) -> InsightResult<RunSummary> {
        let span = info_span!("insight.pipeline.backfill", limit, batch_size);
        let _entered = span.enter();

        let page_size = batch_size.max(1);
        let mut summary = RunSummary::empty();

        while summary.processed < limit {
            let want = page_size.min(limit - summary.processed);
            let page = self
                .gateway
                .fetch_pending_categorization(want, summary.failed)?;
            if page.is_empty() {
                break;
            }

            let start = Instant::now();
            let texts: Vec<String> = page.iter().map(|r| r.text.clone()).collect();
            let results = self.scorer.score_batch(&texts);

            let failures: Vec<RecordFailure> = page
                .par_iter()
                .zip(results.par_iter())
                .filter_map(|(review, result)| {
                    let outcome = self.gateway.update_categorization(&review.id, result);
                    write_problem("categorization", outcome).map(|reason| {
                        warn!(review_id = %review.id, %reason, "review not categorized");
                        RecordFailure {
                            review_id: review.id.clone(),
                            reason,
                        }
                    })
                })
                .collect();

            let page_summary = RunSummary::from_outcomes(
                page.len(),
                failures,
                start.elapsed().as_millis() as u64,
            );
            debug!(
                page = page.len(),
                succeeded = page_summary.succeeded,
                "backfill page written"
            );
            summary.absorb(page_summary);
        }

        info!(
            processed = summary.processed,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "categorization backfill complete"
        );
        Ok(summary)
    }
}
