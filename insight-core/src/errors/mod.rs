mod classifier_error;
mod insight_error;
mod storage_error;

pub use classifier_error::ClassifierError;
pub use insight_error::{InsightError, InsightResult};
pub use storage_error::StorageError;
