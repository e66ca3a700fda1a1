//! Model backends and backend selection.

#[cfg(feature = "onnx")]
mod logits;
#[cfg(feature = "onnx")]
mod onnx_provider;

use std::sync::Arc;

use insight_core::config::ClassifierConfig;
use insight_core::errors::{ClassifierError, InsightResult};
use insight_core::traits::IPolarityModel;

#[cfg(feature = "onnx")]
pub use onnx_provider::OnnxPolarityModel;

/// Build the backend named by `config.provider`.
///
/// # Errors
/// `ClassifierError::Unavailable` for unknown providers or providers not
/// compiled into this build; load errors from the backend itself.
pub fn create_model(config: &ClassifierConfig) -> InsightResult<Arc<dyn IPolarityModel>> {
    match config.provider.as_str() {
        #[cfg(feature = "onnx")]
        "onnx" => Ok(Arc::new(OnnxPolarityModel::load(config)?)),
        other => Err(ClassifierError::Unavailable {
            reason: format!("unknown or disabled classifier provider: {other}"),
        }
        .into()),
    }
}
