//! Raw `(label, score)` to three-way distribution.

use insight_core::errors::{ClassifierError, InsightResult};
use insight_core::models::{Polarity, PolarityResult, PolarityWeights, RawPrediction};

use crate::labels::map_label;

/// Spread a winning score over the three labels.
///
/// The winner keeps `score`; the other two split the remainder evenly.
/// The score must be finite and in `(0, 1]`.
pub fn normalize(
    raw: &RawPrediction,
    model_version: &str,
    elapsed_ms: u64,
) -> InsightResult<PolarityResult> {
    let score = raw.score;
    if !score.is_finite() || score <= 0.0 || score > 1.0 {
        return Err(ClassifierError::InvalidScore { score }.into());
    }

    let label = map_label(&raw.label);
    let rest = (1.0 - score) / 2.0;
    let weights = match label {
        Polarity::Positive => PolarityWeights {
            positive: score,
            neutral: rest,
            negative: rest,
        },
        Polarity::Neutral => PolarityWeights {
            positive: rest,
            neutral: score,
            negative: rest,
        },
        Polarity::Negative => PolarityWeights {
            positive: rest,
            neutral: rest,
            negative: score,
        },
    };

    Ok(PolarityResult {
        label,
        weights,
        confidence: score,
        model_version: model_version.to_string(),
        elapsed_ms,
    })
}

/// Result for text with nothing to classify.
pub fn neutral_default(model_version: &str) -> PolarityResult {
    PolarityResult {
        label: Polarity::Neutral,
        weights: PolarityWeights::uniform(),
        confidence: 0.0,
        model_version: model_version.to_string(),
        elapsed_ms: 0,
    }
}
