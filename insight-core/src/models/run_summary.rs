use serde::{Deserialize, Serialize};

/// Why a single review did not make it through a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFailure {
    pub review_id: String,
    pub reason: String,
}

/// Outcome counts of one orchestrator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// `succeeded / processed`, 0.0 for an empty run.
    pub success_rate: f64,
    pub failures: Vec<RecordFailure>,
    pub elapsed_ms: u64,
}

impl RunSummary {
    /// Summary of a run that found nothing to do.
    pub fn empty() -> Self {
        Self::from_outcomes(0, Vec::new(), 0)
    }

    /// Build a summary from the processed count and the failures collected.
    pub fn from_outcomes(processed: usize, failures: Vec<RecordFailure>, elapsed_ms: u64) -> Self {
        let failed = failures.len();
        let succeeded = processed.saturating_sub(failed);
        let success_rate = if processed == 0 {
            0.0
        } else {
            succeeded as f64 / processed as f64
        };
        Self {
            processed,
            succeeded,
            failed,
            success_rate,
            failures,
            elapsed_ms,
        }
    }

    /// Fold another run's counts into this one (used by paged backfills).
    pub fn absorb(&mut self, other: RunSummary) {
        let mut failures = std::mem::take(&mut self.failures);
        failures.extend(other.failures);
        *self = Self::from_outcomes(
            self.processed + other.processed,
            failures,
            self.elapsed_ms + other.elapsed_ms,
        );
    }
}
