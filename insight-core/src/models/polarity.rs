use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;

/// Three-way polarity label shared by the classifier and the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    pub const ALL: [Polarity; 3] = [Polarity::Positive, Polarity::Neutral, Polarity::Negative];

    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Neutral => "neutral",
            Polarity::Negative => "negative",
        }
    }

    /// Inverse of [`Polarity::as_str`].
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == raw)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probability mass assigned to each polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityWeights {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl PolarityWeights {
    /// Uniform distribution, used when there is no evidence at all.
    pub fn uniform() -> Self {
        let third = 1.0 / 3.0;
        Self {
            positive: third,
            neutral: third,
            negative: third,
        }
    }

    pub fn get(&self, label: Polarity) -> f64 {
        match label {
            Polarity::Positive => self.positive,
            Polarity::Neutral => self.neutral,
            Polarity::Negative => self.negative,
        }
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// Largest of the three weights.
    pub fn max(&self) -> f64 {
        self.positive.max(self.neutral).max(self.negative)
    }

    /// Non-negative and summing to 1 within tolerance.
    pub fn is_valid(&self) -> bool {
        Polarity::ALL.iter().all(|&l| self.get(l) >= 0.0)
            && (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

/// What an opaque classification model returns: its winning label and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    pub label: String,
    pub score: f64,
}

impl RawPrediction {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Normalized output of the polarity classifier for one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarityResult {
    pub label: Polarity,
    pub weights: PolarityWeights,
    pub confidence: f64,
    pub model_version: String,
    pub elapsed_ms: u64,
}

/// Persisted polarity block. `completed` drives the pending predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarityBlock {
    pub completed: bool,
    #[serde(flatten)]
    pub result: PolarityResult,
    pub computed_at: DateTime<Utc>,
}

impl PolarityBlock {
    pub fn completed(result: PolarityResult) -> Self {
        Self {
            completed: true,
            result,
            computed_at: Utc::now(),
        }
    }
}
