/// Polarity classifier errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifierError {
    #[error("model load failed: {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("classifier unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("score out of range (0, 1]: {score}")]
    InvalidScore { score: f64 },

    #[error("batch length mismatch: expected {expected}, got {actual}")]
    BatchLengthMismatch { expected: usize, actual: usize },
}
