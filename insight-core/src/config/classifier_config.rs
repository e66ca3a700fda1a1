use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_CLASSIFIER_INPUT_CHARS, MAX_CLASSIFIER_TOKENS};

/// Polarity classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Backend: "onnx".
    pub provider: String,
    /// Model identifier, recorded in every result's version string.
    pub model_name: String,
    /// Path to the ONNX model file.
    pub model_path: Option<String>,
    /// Path to the HuggingFace `tokenizer.json`.
    pub tokenizer_path: Option<String>,
    /// Raw label for each output index of the model head.
    pub labels: Vec<String>,
    /// Characters kept from each text before classification.
    pub max_input_chars: usize,
    /// Token ids kept from each encoded text.
    pub max_tokens: usize,
    /// ONNX Runtime intra-op threads.
    pub intra_threads: usize,
    /// Feed `token_type_ids` as a third model input.
    pub use_token_type_ids: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_CLASSIFIER_PROVIDER.to_string(),
            model_name: defaults::DEFAULT_MODEL_NAME.to_string(),
            model_path: None,
            tokenizer_path: None,
            labels: defaults::DEFAULT_MODEL_LABELS
                .iter()
                .map(|l| l.to_string())
                .collect(),
            max_input_chars: MAX_CLASSIFIER_INPUT_CHARS,
            max_tokens: MAX_CLASSIFIER_TOKENS,
            intra_threads: defaults::DEFAULT_INTRA_THREADS,
            use_token_type_ids: defaults::DEFAULT_USE_TOKEN_TYPE_IDS,
        }
    }
}
