use super::{ClassifierError, StorageError};

/// Convenience alias used across the workspace.
pub type InsightResult<T> = Result<T, InsightError>;

/// Top-level error for every insight crate.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("review not found: {id}")]
    ReviewNotFound { id: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("classifier error: {0}")]
    ClassifierError(#[from] ClassifierError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl InsightError {
    /// Whether this error means the classifier could not be brought up at all.
    pub fn is_classifier_unavailable(&self) -> bool {
        matches!(
            self,
            InsightError::ClassifierError(
                ClassifierError::Unavailable { .. } | ClassifierError::ModelLoadFailed { .. }
            )
        )
    }
}
