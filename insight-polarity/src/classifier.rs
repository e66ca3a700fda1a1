//! PolarityClassifier: the lazily initialized, shared model handle.

use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;

use insight_core::config::ClassifierConfig;
use insight_core::constants::MAX_CLASSIFIER_INPUT_CHARS;
use insight_core::errors::{ClassifierError, InsightError, InsightResult};
use insight_core::models::{PolarityResult, RawPrediction};
use insight_core::traits::IPolarityModel;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::normalize::{neutral_default, normalize};
use crate::providers;
use crate::truncate::truncate_chars;

/// Builds the model on first use.
pub type ModelLoader = dyn Fn() -> InsightResult<Arc<dyn IPolarityModel>> + Send + Sync;

/// Polarity classification over a single, lazily built model instance.
///
/// Create one per process and share it behind an `Arc`. The first call that
/// needs the model runs the loader; concurrent first callers wait on the same
/// initialization and every later call reuses the instance. A failed load
/// leaves the handle empty so the next call tries again.
pub struct PolarityClassifier {
    loader: Box<ModelLoader>,
    model: OnceLock<Arc<dyn IPolarityModel>>,
    init_lock: Mutex<()>,
    max_input_chars: usize,
}

impl PolarityClassifier {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> InsightResult<Arc<dyn IPolarityModel>> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            model: OnceLock::new(),
            init_lock: Mutex::new(()),
            max_input_chars: MAX_CLASSIFIER_INPUT_CHARS,
        }
    }

    /// Handle whose loader builds the backend named in `config`.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let config = config.clone();
        let max_input_chars = config.max_input_chars;
        Self::new(move || providers::create_model(&config)).with_max_input_chars(max_input_chars)
    }

    /// Handle over an already constructed model.
    pub fn with_model(model: Arc<dyn IPolarityModel>) -> Self {
        Self::new(move || Ok(Arc::clone(&model)))
    }

    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// Version of the loaded model, `None` before the first successful load.
    pub fn model_version(&self) -> Option<String> {
        self.model.get().map(|model| model.version())
    }

    /// Build the model if it has not been built yet.
    ///
    /// # Errors
    /// Any loader failure is reported as a classifier error
    /// (`Unavailable` unless the loader already said `ModelLoadFailed`).
    pub fn ensure_loaded(&self) -> InsightResult<Arc<dyn IPolarityModel>> {
        if let Some(model) = self.model.get() {
            return Ok(Arc::clone(model));
        }

        let _guard = self.init_lock.lock().map_err(|_| ClassifierError::Unavailable {
            reason: "model initialization lock poisoned".to_string(),
        })?;

        // Another caller may have finished while we waited.
        if let Some(model) = self.model.get() {
            return Ok(Arc::clone(model));
        }

        let start = Instant::now();
        let model = (self.loader)().map_err(|e| match e {
            InsightError::ClassifierError(_) => e,
            other => ClassifierError::Unavailable {
                reason: other.to_string(),
            }
            .into(),
        })?;

        info!(
            model = model.name(),
            version = %model.version(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "polarity model loaded"
        );

        let _ = self.model.set(Arc::clone(&model));
        Ok(model)
    }

    /// Classify one text.
    pub fn classify_one(&self, text: &str) -> InsightResult<PolarityResult> {
        let model = self.ensure_loaded()?;
        let version = model.version();
        if text.trim().is_empty() {
            return Ok(neutral_default(&version));
        }

        let input = truncate_chars(text, self.max_input_chars);
        let start = Instant::now();
        let raw = model.infer(input)?;
        normalize(&raw, &version, start.elapsed().as_millis() as u64)
    }

    /// Classify many texts.
    ///
    /// The outer error means the model could not be brought up. Otherwise the
    /// returned vector has one entry per input, in input order, and a failure
    /// affects only its own entry. Chunks of `batch_size` texts (0 is treated
    /// as 1) are sent to the model in parallel; chunking never changes an
    /// individual result.
    pub fn classify_batch(
        &self,
        texts: &[String],
        batch_size: usize,
    ) -> InsightResult<Vec<InsightResult<PolarityResult>>> {
        let model = self.ensure_loaded()?;
        let version = model.version();
        let chunk_size = batch_size.max(1);

        let chunks: Vec<Vec<InsightResult<PolarityResult>>> = texts
            .par_chunks(chunk_size)
            .map(|chunk| self.classify_chunk(model.as_ref(), &version, chunk))
            .collect();

        let results: Vec<_> = chunks.into_iter().flatten().collect();
        debug!(
            count = results.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            chunk_size,
            "polarity batch classified"
        );
        Ok(results)
    }

    fn classify_chunk(
        &self,
        model: &dyn IPolarityModel,
        version: &str,
        chunk: &[String],
    ) -> Vec<InsightResult<PolarityResult>> {
        // Blank texts are answered locally and never reach the model.
        let model_slots: Vec<usize> = chunk
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(i, _)| i)
            .collect();
        let inputs: Vec<String> = model_slots
            .iter()
            .map(|&i| truncate_chars(&chunk[i], self.max_input_chars).to_string())
            .collect();

        let mut raw: Vec<Option<InsightResult<RawPrediction>>> =
            chunk.iter().map(|_| None).collect();
        let mut per_item_ms = 0;

        if !inputs.is_empty() {
            let start = Instant::now();
            let predictions = model.infer_batch(&inputs);
            per_item_ms = start.elapsed().as_millis() as u64 / inputs.len() as u64;

            if predictions.len() == inputs.len() {
                for (&slot, prediction) in model_slots.iter().zip(predictions) {
                    raw[slot] = Some(prediction);
                }
            } else {
                let err = ClassifierError::BatchLengthMismatch {
                    expected: inputs.len(),
                    actual: predictions.len(),
                };
                warn!(error = %err, "model returned a malformed batch");
                for &slot in &model_slots {
                    raw[slot] = Some(Err(err.clone().into()));
                }
            }
        }

        raw.into_iter()
            .map(|entry| match entry {
                None => Ok(neutral_default(version)),
                Some(Ok(prediction)) => normalize(&prediction, version, per_item_ms),
                Some(Err(e)) => Err(e),
            })
            .collect()
    }
}

impl std::fmt::Debug for PolarityClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolarityClassifier")
            .field("loaded", &self.is_loaded())
            .field("max_input_chars", &self.max_input_chars)
            .finish()
    }
}
