use serde::{Deserialize, Serialize};

/// Snapshot of outstanding work and the scorers in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub pending_polarity: usize,
    pub pending_categorization: usize,
    pub model_version: String,
    pub lexicon_version: String,
}
