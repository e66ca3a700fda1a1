//! Processor: runs the pipeline against an injected gateway and classifier.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, info_span};

use insight_core::config::PipelineConfig;
use insight_core::constants::MODEL_NOT_LOADED;
use insight_core::errors::InsightResult;
use insight_core::models::{PendingKind, PipelineStats, ReviewScope, RunSummary};
use insight_core::traits::IReviewGateway;
use insight_lexicon::LexiconScorer;
use insight_polarity::PolarityClassifier;

use crate::pipeline::persist::persist_results;
use crate::pipeline::score::score_reviews;
use crate::pipeline::RunStage;

/// The batch orchestrator.
///
/// Holds no per-run state; the classifier handle is shared so its model is
/// loaded once and reused by every run.
pub struct Processor<G: IReviewGateway> {
    pub(crate) gateway: G,
    pub(crate) classifier: Arc<PolarityClassifier>,
    pub(crate) scorer: LexiconScorer,
    pub(crate) config: PipelineConfig,
}

impl<G: IReviewGateway> Processor<G> {
    pub fn new(gateway: G, classifier: Arc<PolarityClassifier>, scorer: LexiconScorer) -> Self {
        Self {
            gateway,
            classifier,
            scorer,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn classifier(&self) -> &Arc<PolarityClassifier> {
        &self.classifier
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process up to `limit` pending reviews in `scope`, after skipping `skip`.
    ///
    /// # Errors
    /// Fetch failures and an unavailable classifier abort the run. Everything
    /// else is counted per record in the returned summary.
    pub fn run(
        &self,
        scope: &ReviewScope,
        limit: usize,
        skip: usize,
        batch_size: usize,
    ) -> InsightResult<RunSummary> {
        let span = info_span!("insight.pipeline.run", scope = %scope, limit, skip, batch_size);
        let _entered = span.enter();
        let start = Instant::now();

        debug!(stage = %RunStage::Fetching);
        let reviews = self.gateway.fetch_pending(scope, limit, skip)?;
        if reviews.is_empty() {
            info!("no pending reviews");
            return Ok(RunSummary::empty());
        }

        debug!(stage = %RunStage::Scoring, count = reviews.len());
        let scored = score_reviews(&self.classifier, &self.scorer, &reviews, batch_size)?;

        debug!(stage = %RunStage::Persisting);
        let failures = persist_results(&self.gateway, &reviews, scored);

        let summary = RunSummary::from_outcomes(
            reviews.len(),
            failures,
            start.elapsed().as_millis() as u64,
        );
        debug!(stage = %RunStage::Done);
        info!(
            processed = summary.processed,
            succeeded = summary.succeeded,
            failed = summary.failed,
            elapsed_ms = summary.elapsed_ms,
            "run complete"
        );
        Ok(summary)
    }

    /// All pending reviews.
    pub fn run_pending(
        &self,
        limit: usize,
        skip: usize,
        batch_size: usize,
    ) -> InsightResult<RunSummary> {
        self.run(&ReviewScope::All, limit, skip, batch_size)
    }

    /// Pending reviews of one teacher.
    pub fn run_for_subject(
        &self,
        subject_id: i64,
        limit: usize,
        batch_size: usize,
    ) -> InsightResult<RunSummary> {
        self.run(&ReviewScope::BySubject(subject_id), limit, 0, batch_size)
    }

    /// Pending reviews whose course name contains `course`, ignoring case.
    pub fn run_for_course(
        &self,
        course: &str,
        limit: usize,
        batch_size: usize,
    ) -> InsightResult<RunSummary> {
        self.run(&ReviewScope::ByCourse(course.to_string()), limit, 0, batch_size)
    }

    /// Outstanding work and the scorer versions in use.
    pub fn stats(&self) -> InsightResult<PipelineStats> {
        Ok(PipelineStats {
            pending_polarity: self.gateway.count_pending(PendingKind::Polarity)?,
            pending_categorization: self.gateway.count_pending(PendingKind::Categorization)?,
            model_version: self
                .classifier
                .model_version()
                .unwrap_or_else(|| MODEL_NOT_LOADED.to_string()),
            lexicon_version: self.scorer.version().to_string(),
        })
    }
}
