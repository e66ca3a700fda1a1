use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use insight_core::config::LexiconConfig;
use insight_core::constants::{
    LEXICON_NEGATIVE_THRESHOLD, LEXICON_NEUTRAL_CONFIDENCE, LEXICON_POSITIVE_THRESHOLD,
    LEXICON_VERSION,
};
use insight_core::models::{Axis, AxisResult, CategorizationResult, Polarity};

use crate::lexicon::{AxisLexicon, Lexicon};

/// Scores review text against a [`Lexicon`].
///
/// Stateless apart from the term lists; cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn from_config(config: &LexiconConfig) -> Self {
        Self::new(Lexicon::from_config(config))
    }

    pub fn version(&self) -> &'static str {
        LEXICON_VERSION
    }

    /// Score one text along all three axes.
    pub fn score(&self, text: &str) -> CategorizationResult {
        let start = Instant::now();
        let lowered = text.to_lowercase();

        let [teaching_quality, evaluation_method, empathy] =
            Axis::ALL.map(|axis| score_axis(&lowered, self.lexicon.axis(axis)));

        CategorizationResult {
            teaching_quality,
            evaluation_method,
            empathy,
            model_version: LEXICON_VERSION.to_string(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Score many texts in parallel. Output order matches input order.
    pub fn score_batch(&self, texts: &[String]) -> Vec<CategorizationResult> {
        let start = Instant::now();
        let results: Vec<CategorizationResult> =
            texts.par_iter().map(|text| self.score(text)).collect();
        debug!(
            count = texts.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "lexicon batch scored"
        );
        results
    }
}

/// Verdict for one axis over already-lowercased text.
fn score_axis(lowered: &str, terms: &AxisLexicon) -> AxisResult {
    let positives: Vec<&String> = terms
        .positive()
        .iter()
        .filter(|term| lowered.contains(term.as_str()))
        .collect();
    let negatives: Vec<&String> = terms
        .negative()
        .iter()
        .filter(|term| lowered.contains(term.as_str()))
        .collect();

    let total = positives.len() + negatives.len();
    if total == 0 {
        return AxisResult::no_signal();
    }

    let score_pos = positives.len() as f64 / total as f64;
    let (label, confidence, matched) = if score_pos > LEXICON_POSITIVE_THRESHOLD {
        (Polarity::Positive, score_pos, positives)
    } else if score_pos < LEXICON_NEGATIVE_THRESHOLD {
        (Polarity::Negative, 1.0 - score_pos, negatives)
    } else {
        let mut both = positives;
        both.extend(negatives);
        (Polarity::Neutral, LEXICON_NEUTRAL_CONFIDENCE, both)
    };

    AxisResult {
        label,
        confidence,
        matched_terms: matched.into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(pos: &[&str], neg: &[&str]) -> AxisLexicon {
        AxisLexicon::new(pos.iter().copied(), neg.iter().copied())
    }

    #[test]
    fn no_match_is_neutral_without_terms() {
        let result = score_axis("nada relevante", &axis(&["claro"], &["confuso"]));
        assert_eq!(result, AxisResult::no_signal());
    }

    #[test]
    fn all_negative_has_full_confidence() {
        let result = score_axis("confuso y aburrido", &axis(&["claro"], &["confuso", "aburrido"]));
        assert_eq!(result.label, Polarity::Negative);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.matched_terms, ["confuso", "aburrido"]);
    }

    #[test]
    fn negative_verdict_lists_only_negatives() {
        // 1 of 4 positive: score_pos = 0.25
        let terms = axis(&["a1"], &["b1", "b2", "b3"]);
        let result = score_axis("a1 b1 b2 b3", &terms);
        assert_eq!(result.label, Polarity::Negative);
        assert!((result.confidence - 0.75).abs() < 1e-12);
        assert_eq!(result.matched_terms, ["b1", "b2", "b3"]);
    }

    #[test]
    fn term_counts_once_even_if_repeated() {
        let terms = axis(&["claro"], &["confuso"]);
        let result = score_axis("claro claro claro confuso", &terms);
        assert_eq!(result.label, Polarity::Neutral);
    }
}
