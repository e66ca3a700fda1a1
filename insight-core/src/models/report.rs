use serde::{Deserialize, Serialize};

use super::{Axis, Polarity, ReviewScope};

/// How many stored verdicts carry each label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn add(&mut self, label: Polarity, count: usize) {
        match label {
            Polarity::Positive => self.positive += count,
            Polarity::Neutral => self.neutral += count,
            Polarity::Negative => self.negative += count,
        }
    }

    pub fn get(&self, label: Polarity) -> usize {
        match label {
            Polarity::Positive => self.positive,
            Polarity::Neutral => self.neutral,
            Polarity::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Fraction of counted verdicts with `label`; 0 when nothing was counted.
    pub fn share(&self, label: Polarity) -> f64 {
        ratio(self.get(label), self.total())
    }
}

/// Analysis coverage and label distribution over one scope of reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeReport {
    pub scope: ReviewScope,
    pub total: usize,
    pub polarity_done: usize,
    pub categorization_done: usize,
    pub polarity: LabelCounts,
    pub teaching_quality: LabelCounts,
    pub evaluation_method: LabelCounts,
    pub empathy: LabelCounts,
}

impl ScopeReport {
    pub fn empty(scope: ReviewScope) -> Self {
        Self {
            scope,
            total: 0,
            polarity_done: 0,
            categorization_done: 0,
            polarity: LabelCounts::default(),
            teaching_quality: LabelCounts::default(),
            evaluation_method: LabelCounts::default(),
            empathy: LabelCounts::default(),
        }
    }

    pub fn axis(&self, axis: Axis) -> &LabelCounts {
        match axis {
            Axis::TeachingQuality => &self.teaching_quality,
            Axis::EvaluationMethod => &self.evaluation_method,
            Axis::Empathy => &self.empathy,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut LabelCounts {
        match axis {
            Axis::TeachingQuality => &mut self.teaching_quality,
            Axis::EvaluationMethod => &mut self.evaluation_method,
            Axis::Empathy => &mut self.empathy,
        }
    }

    pub fn polarity_done_rate(&self) -> f64 {
        ratio(self.polarity_done, self.total)
    }

    pub fn categorization_done_rate(&self) -> f64 {
        ratio(self.categorization_done, self.total)
    }
}

/// Number of reviews filed under one course name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCount {
    pub course_name: String,
    pub reviews: usize,
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
