//! Scoring stage: classifier and lexicon run side by side.

use insight_core::errors::InsightResult;
use insight_core::models::{CategorizationResult, PolarityResult, Review};
use insight_lexicon::LexiconScorer;
use insight_polarity::PolarityClassifier;

/// Both judgments for one review. The polarity side can fail per item.
pub struct ScoredReview {
    pub polarity: InsightResult<PolarityResult>,
    pub categorization: CategorizationResult,
}

/// Score every review. One entry per review, in order.
///
/// # Errors
/// Only when the classifier model cannot be brought up.
pub fn score_reviews(
    classifier: &PolarityClassifier,
    scorer: &LexiconScorer,
    reviews: &[Review],
    batch_size: usize,
) -> InsightResult<Vec<ScoredReview>> {
    classifier.ensure_loaded()?;

    let texts: Vec<String> = reviews.iter().map(|r| r.text.clone()).collect();
    let (polarity, categorization) = rayon::join(
        || classifier.classify_batch(&texts, batch_size),
        || scorer.score_batch(&texts),
    );

    Ok(polarity?
        .into_iter()
        .zip(categorization)
        .map(|(polarity, categorization)| ScoredReview {
            polarity,
            categorization,
        })
        .collect())
}
