use serde::{Deserialize, Serialize};

use super::{CategorizationBlock, PolarityBlock};

/// A student review of a teacher, as ingested upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Opaque, stable identifier.
    pub id: String,
    /// Raw review text. May be empty.
    #[serde(default)]
    pub text: String,
    /// Identifier of the reviewed teacher.
    pub subject_id: i64,
    #[serde(default)]
    pub course_name: String,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        subject_id: i64,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            subject_id,
            course_name: course_name.into(),
        }
    }
}

/// A review together with whatever result blocks have been persisted for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    pub review: Review,
    pub polarity: Option<PolarityBlock>,
    pub categorization: Option<CategorizationBlock>,
}

impl ReviewAnalysis {
    /// Both blocks are present and marked completed.
    pub fn is_complete(&self) -> bool {
        self.polarity.as_ref().is_some_and(|b| b.completed)
            && self.categorization.as_ref().is_some_and(|b| b.completed)
    }
}
