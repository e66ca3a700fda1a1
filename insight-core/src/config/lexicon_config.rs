use serde::{Deserialize, Serialize};

use crate::models::Axis;

/// Replacement term lists for one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTerms {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Lexicon overrides. Axes left unset keep the built-in term lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub teaching_quality: Option<AxisTerms>,
    pub evaluation_method: Option<AxisTerms>,
    pub empathy: Option<AxisTerms>,
}

impl LexiconConfig {
    pub fn override_for(&self, axis: Axis) -> Option<&AxisTerms> {
        match axis {
            Axis::TeachingQuality => self.teaching_quality.as_ref(),
            Axis::EvaluationMethod => self.evaluation_method.as_ref(),
            Axis::Empathy => self.empathy.as_ref(),
        }
    }
}
