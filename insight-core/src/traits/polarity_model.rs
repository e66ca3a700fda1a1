use crate::errors::InsightResult;
use crate::models::RawPrediction;

/// Opaque pretrained text classifier.
///
/// Given text, returns its winning raw label and that label's score.
pub trait IPolarityModel: Send + Sync {
    /// Classify a single text.
    fn infer(&self, text: &str) -> InsightResult<RawPrediction>;

    /// Classify a batch. One entry per input, in input order; a failure in
    /// one entry must not affect the others.
    fn infer_batch(&self, texts: &[String]) -> Vec<InsightResult<RawPrediction>> {
        texts.iter().map(|t| self.infer(t)).collect()
    }

    /// Human-readable model name.
    fn name(&self) -> &str;

    /// Version string recorded alongside every result.
    fn version(&self) -> String {
        format!("{}-v1.0", self.name())
    }
}
