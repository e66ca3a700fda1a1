use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Texts per classifier batch.
    pub batch_size: usize,
    /// Page size of the categorization backfill.
    pub backfill_batch_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            backfill_batch_size: defaults::DEFAULT_BACKFILL_BATCH_SIZE,
        }
    }
}
