use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Polarity;

/// Topical dimension scored by the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    TeachingQuality,
    EvaluationMethod,
    Empathy,
}

impl Axis {
    /// All axes in scoring order.
    pub const ALL: [Axis; 3] = [Axis::TeachingQuality, Axis::EvaluationMethod, Axis::Empathy];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::TeachingQuality => "teaching_quality",
            Axis::EvaluationMethod => "evaluation_method",
            Axis::Empathy => "empathy",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for a single axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisResult {
    pub label: Polarity,
    pub confidence: f64,
    /// Terms that decided the verdict, in lexicon scan order.
    pub matched_terms: Vec<String>,
}

impl AxisResult {
    /// Neutral verdict carrying no signal.
    pub fn no_signal() -> Self {
        Self {
            label: Polarity::Neutral,
            confidence: crate::constants::LEXICON_NEUTRAL_CONFIDENCE,
            matched_terms: Vec::new(),
        }
    }
}

/// Lexicon verdicts for all three axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizationResult {
    pub teaching_quality: AxisResult,
    pub evaluation_method: AxisResult,
    pub empathy: AxisResult,
    pub model_version: String,
    pub elapsed_ms: u64,
}

impl CategorizationResult {
    pub fn axis(&self, axis: Axis) -> &AxisResult {
        match axis {
            Axis::TeachingQuality => &self.teaching_quality,
            Axis::EvaluationMethod => &self.evaluation_method,
            Axis::Empathy => &self.empathy,
        }
    }
}

/// Persisted categorization block. `completed` drives the pending predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizationBlock {
    pub completed: bool,
    #[serde(flatten)]
    pub result: CategorizationResult,
    pub computed_at: DateTime<Utc>,
}

impl CategorizationBlock {
    pub fn completed(result: CategorizationResult) -> Self {
        Self {
            completed: true,
            result,
            computed_at: Utc::now(),
        }
    }
}
