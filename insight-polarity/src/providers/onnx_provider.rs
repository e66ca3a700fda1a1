//! ONNX Runtime sequence-classification backend.
//!
//! Loads a fine-tuned BERT-style classifier exported to ONNX together with its
//! HuggingFace `tokenizer.json`. Output logits are softmaxed and the winning
//! index is reported under the configured raw label.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use insight_core::config::ClassifierConfig;
use insight_core::errors::{ClassifierError, InsightResult};
use insight_core::models::RawPrediction;
use insight_core::traits::IPolarityModel;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use super::logits::softmax_argmax;

/// Sequence classifier running on ONNX Runtime.
pub struct OnnxPolarityModel {
    /// `Session::run` needs `&mut self`; the trait only gives us `&self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    labels: Vec<String>,
    max_tokens: usize,
    use_token_type_ids: bool,
    model_name: String,
}

impl OnnxPolarityModel {
    /// Load the model and tokenizer named in `config`.
    ///
    /// The tokenizer defaults to `tokenizer.json` next to the model file.
    ///
    /// # Errors
    /// `ClassifierError::ModelLoadFailed` when either file is missing or
    /// cannot be parsed.
    pub fn load(config: &ClassifierConfig) -> InsightResult<Self> {
        let model_path = config
            .model_path
            .as_deref()
            .ok_or_else(|| ClassifierError::ModelLoadFailed {
                path: "<unset>".to_string(),
                reason: "classifier.model_path is not configured".to_string(),
            })?;
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(load_failed(model_path, "model file not found"));
        }

        let tokenizer_path = match config.tokenizer_path.as_deref() {
            Some(p) => PathBuf::from(p),
            None => path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("tokenizer.json"),
        };
        let tokenizer_display = tokenizer_path.display().to_string();
        if !tokenizer_path.exists() {
            return Err(load_failed(&tokenizer_display, "tokenizer file not found"));
        }

        if config.labels.is_empty() {
            return Err(load_failed(model_path, "no output labels configured"));
        }

        let session = Session::builder()
            .map_err(|e| load_failed(model_path, e))?
            .with_intra_threads(config.intra_threads.max(1))
            .map_err(|e| load_failed(model_path, e))?
            .commit_from_file(path)
            .map_err(|e| load_failed(model_path, e))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| load_failed(&tokenizer_display, e))?;

        debug!(
            model = %config.model_name,
            labels = config.labels.len(),
            "ONNX classifier loaded"
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            labels: config.labels.clone(),
            max_tokens: config.max_tokens.max(2),
            use_token_type_ids: config.use_token_type_ids,
            model_name: config.model_name.clone(),
        })
    }
}

impl IPolarityModel for OnnxPolarityModel {
    fn infer(&self, text: &str) -> InsightResult<RawPrediction> {
        let (ids, mask, types) = encode(&self.tokenizer, text, self.max_tokens)?;
        let shape = vec![1i64, ids.len() as i64];

        let ids_tensor = Tensor::from_array((shape.clone(), ids))
            .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;
        let mask_tensor = Tensor::from_array((shape.clone(), mask))
            .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| inference_failed(format!("session lock poisoned: {e}")))?;

        let outputs = if self.use_token_type_ids {
            let type_tensor = Tensor::from_array((shape, types))
                .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;
            session.run(ort::inputs![ids_tensor, mask_tensor, type_tensor])
        } else {
            session.run(ort::inputs![ids_tensor, mask_tensor])
        }
        .map_err(|e| inference_failed(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| inference_failed("no output tensor"))?;

        let (out_shape, logits) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| inference_failed(format!("tensor extraction failed: {e}")))?;

        // [batch=1, num_labels]
        let num_labels = self.labels.len();
        if out_shape.len() != 2 || out_shape[1] as usize != num_labels {
            return Err(inference_failed(format!(
                "unexpected output shape: {out_shape:?}, expected [1, {num_labels}]"
            )));
        }

        let (idx, prob) = softmax_argmax(&logits[..num_labels])
            .ok_or_else(|| inference_failed("model produced non-finite logits"))?;

        Ok(RawPrediction::new(self.labels[idx].clone(), prob as f64))
    }

    fn infer_batch(&self, texts: &[String]) -> Vec<InsightResult<RawPrediction>> {
        // Sequential: every call goes through the same session lock anyway.
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

/// Token ids, attention mask and type ids, cut to `max_tokens`.
/// The final special token is kept when cutting.
fn encode(
    tokenizer: &Tokenizer,
    text: &str,
    max_tokens: usize,
) -> InsightResult<(Vec<i64>, Vec<i64>, Vec<i64>)> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| inference_failed(format!("tokenization failed: {e}")))?;

    let mut ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
    let mut mask: Vec<i64> = encoding
        .get_attention_mask()
        .iter()
        .map(|&m| m as i64)
        .collect();
    let mut types: Vec<i64> = encoding.get_type_ids().iter().map(|&t| t as i64).collect();

    if ids.len() > max_tokens {
        for column in [&mut ids, &mut mask, &mut types] {
            if let Some(last) = column.last().copied() {
                column.truncate(max_tokens - 1);
                column.push(last);
            }
        }
    }
    Ok((ids, mask, types))
}

fn load_failed(path: &str, reason: impl std::fmt::Display) -> insight_core::InsightError {
    ClassifierError::ModelLoadFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn inference_failed(reason: impl Into<String>) -> insight_core::InsightError {
    ClassifierError::InferenceFailed {
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLS: i64 = 1;
    const SEP: i64 = 2;

    fn word_level_tokenizer() -> Tokenizer {
        r#"{
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [],
            "normalizer": null,
            "pre_tokenizer": { "type": "Whitespace" },
            "post_processor": {
                "type": "TemplateProcessing",
                "single": [
                    { "SpecialToken": { "id": "[CLS]", "type_id": 0 } },
                    { "Sequence": { "id": "A", "type_id": 0 } },
                    { "SpecialToken": { "id": "[SEP]", "type_id": 0 } }
                ],
                "pair": [
                    { "SpecialToken": { "id": "[CLS]", "type_id": 0 } },
                    { "Sequence": { "id": "A", "type_id": 0 } },
                    { "SpecialToken": { "id": "[SEP]", "type_id": 0 } },
                    { "Sequence": { "id": "B", "type_id": 1 } },
                    { "SpecialToken": { "id": "[SEP]", "type_id": 1 } }
                ],
                "special_tokens": {
                    "[CLS]": { "id": "[CLS]", "ids": [1], "tokens": ["[CLS]"] },
                    "[SEP]": { "id": "[SEP]", "ids": [2], "tokens": ["[SEP]"] }
                }
            },
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": {
                    "[UNK]": 0, "[CLS]": 1, "[SEP]": 2,
                    "muy": 3, "buen": 4, "profesor": 5
                },
                "unk_token": "[UNK]"
            }
        }"#
        .parse()
        .unwrap()
    }

    #[test]
    fn short_text_is_left_whole() {
        let tokenizer = word_level_tokenizer();
        let (ids, mask, types) = encode(&tokenizer, "muy buen profesor", 512).unwrap();
        assert_eq!(ids, [CLS, 3, 4, 5, SEP]);
        assert_eq!(mask, [1i64; 5]);
        assert_eq!(types, [0i64; 5]);
    }

    #[test]
    fn long_text_is_cut_to_budget_keeping_sep() {
        let tokenizer = word_level_tokenizer();
        let text = "muy buen profesor muy buen profesor";

        let (ids, mask, types) = encode(&tokenizer, text, 5).unwrap();

        assert_eq!(ids.len(), 5);
        assert_eq!(ids, [CLS, 3, 4, 5, SEP]);
        assert_eq!(ids.last(), Some(&SEP));
        assert_eq!(mask.len(), 5);
        assert_eq!(types.len(), 5);
    }

    #[test]
    fn text_exactly_at_budget_is_untouched() {
        let tokenizer = word_level_tokenizer();
        let (ids, _, _) = encode(&tokenizer, "muy buen profesor", 5).unwrap();
        assert_eq!(ids, [CLS, 3, 4, 5, SEP]);
    }

    #[test]
    fn unknown_words_map_to_unk() {
        let tokenizer = word_level_tokenizer();
        let (ids, _, _) = encode(&tokenizer, "excelente", 512).unwrap();
        assert_eq!(ids, [CLS, 0, SEP]);
    }
}
