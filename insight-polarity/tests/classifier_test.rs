use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use insight_core::errors::{ClassifierError, InsightError, InsightResult};
use insight_core::models::{Polarity, RawPrediction};
use insight_core::traits::IPolarityModel;
use insight_polarity::PolarityClassifier;
use proptest::prelude::*;

/// Answers from a fixed table; unknown texts get a configurable default.
struct ScriptedModel {
    answers: HashMap<String, InsightResult<RawPrediction>>,
    default: RawPrediction,
    seen: Mutex<Vec<String>>,
}

impl ScriptedModel {
    fn new(default: RawPrediction) -> Self {
        Self {
            answers: HashMap::new(),
            default,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn answer(mut self, text: &str, prediction: RawPrediction) -> Self {
        self.answers.insert(text.to_string(), Ok(prediction));
        self
    }

    fn fail_on(mut self, text: &str) -> Self {
        self.answers.insert(
            text.to_string(),
            Err(ClassifierError::InferenceFailed {
                reason: format!("cannot classify {text}"),
            }
            .into()),
        );
        self
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl IPolarityModel for ScriptedModel {
    fn infer(&self, text: &str) -> InsightResult<RawPrediction> {
        self.seen.lock().unwrap().push(text.to_string());
        match self.answers.get(text) {
            Some(Ok(p)) => Ok(p.clone()),
            Some(Err(e)) => Err(ClassifierError::InferenceFailed {
                reason: e.to_string(),
            }
            .into()),
            None => Ok(self.default.clone()),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Drops the last prediction of every batch.
struct ShortBatchModel;

impl IPolarityModel for ShortBatchModel {
    fn infer(&self, _text: &str) -> InsightResult<RawPrediction> {
        Ok(RawPrediction::new("POS", 0.9))
    }

    fn infer_batch(&self, texts: &[String]) -> Vec<InsightResult<RawPrediction>> {
        texts
            .iter()
            .skip(1)
            .map(|t| self.infer(t))
            .collect()
    }

    fn name(&self) -> &str {
        "short"
    }
}

fn classifier_over(model: ScriptedModel) -> (PolarityClassifier, Arc<ScriptedModel>) {
    let model = Arc::new(model);
    let shared: Arc<dyn IPolarityModel> = model.clone();
    (PolarityClassifier::with_model(shared), model)
}

#[test]
fn pos_at_point_nine_normalizes_to_expected_weights() {
    let (classifier, _) =
        classifier_over(ScriptedModel::new(RawPrediction::new("NEU", 0.5)).answer(
            "excelente profesor",
            RawPrediction::new("POS", 0.9),
        ));

    let result = classifier.classify_one("excelente profesor").unwrap();
    assert_eq!(result.label, Polarity::Positive);
    assert_eq!(result.confidence, 0.9);
    assert_eq!(result.weights.positive, 0.9);
    assert_eq!(result.weights.neutral, (1.0 - 0.9) / 2.0);
    assert_eq!(result.weights.negative, (1.0 - 0.9) / 2.0);
    assert_eq!(result.model_version, "scripted-v1.0");
}

#[test]
fn empty_text_never_reaches_the_model() {
    let (classifier, model) = classifier_over(ScriptedModel::new(RawPrediction::new("POS", 0.9)));

    for text in ["", "   ", "\n\t"] {
        let result = classifier.classify_one(text).unwrap();
        assert_eq!(result.label, Polarity::Neutral);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.elapsed_ms, 0);
        assert!((result.weights.positive - 1.0 / 3.0).abs() < 1e-12);
        assert!(result.weights.is_valid());
    }
    assert!(model.seen().is_empty());
}

#[test]
fn long_text_is_truncated_before_inference() {
    let (classifier, model) = classifier_over(ScriptedModel::new(RawPrediction::new("POS", 0.9)));
    let text = "é".repeat(700);

    classifier.classify_one(&text).unwrap();

    let seen = model.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].chars().count(), 512);
}

#[test]
fn custom_input_budget_is_honored() {
    let model = Arc::new(ScriptedModel::new(RawPrediction::new("POS", 0.9)));
    let shared: Arc<dyn IPolarityModel> = model.clone();
    let classifier = PolarityClassifier::with_model(shared).with_max_input_chars(4);

    classifier.classify_one("abcdefgh").unwrap();
    assert_eq!(model.seen(), ["abcd"]);
}

#[test]
fn one_failure_leaves_the_rest_intact() {
    let (classifier, _) = classifier_over(
        ScriptedModel::new(RawPrediction::new("NEG", 0.8)).fail_on("roto"),
    );
    let texts: Vec<String> = ["uno", "dos", "roto", "cuatro", "cinco"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let results = classifier.classify_batch(&texts, 2).unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 4);
    assert!(results[2].is_err());
    for i in [0, 1, 3, 4] {
        assert_eq!(results[i].as_ref().unwrap().label, Polarity::Negative);
    }
}

#[test]
fn invalid_score_fails_only_that_item() {
    let (classifier, _) = classifier_over(
        ScriptedModel::new(RawPrediction::new("POS", 0.7)).answer("raro", RawPrediction::new("POS", 1.7)),
    );
    let texts = vec!["bien".to_string(), "raro".to_string()];

    let results = classifier.classify_batch(&texts, 8).unwrap();
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(InsightError::ClassifierError(ClassifierError::InvalidScore { .. }))
    ));
}

#[test]
fn blank_items_in_a_batch_get_the_neutral_default() {
    let (classifier, model) = classifier_over(ScriptedModel::new(RawPrediction::new("POS", 0.9)));
    let texts = vec!["bueno".to_string(), "".to_string(), "  ".to_string()];

    let results = classifier.classify_batch(&texts, 3).unwrap();
    assert_eq!(results[0].as_ref().unwrap().label, Polarity::Positive);
    assert_eq!(results[1].as_ref().unwrap().confidence, 0.0);
    assert_eq!(results[2].as_ref().unwrap().label, Polarity::Neutral);
    assert_eq!(model.seen(), ["bueno"]);
}

#[test]
fn short_backend_batch_fails_the_whole_chunk() {
    let classifier = PolarityClassifier::with_model(Arc::new(ShortBatchModel));
    let texts: Vec<String> = (0..5).map(|i| format!("texto {i}")).collect();

    let results = classifier.classify_batch(&texts, 2).unwrap();

    assert_eq!(results.len(), 5);
    for r in &results {
        assert!(matches!(
            r,
            Err(InsightError::ClassifierError(
                ClassifierError::BatchLengthMismatch { .. }
            ))
        ));
    }
}

#[test]
fn zero_batch_size_is_treated_as_one() {
    let (classifier, _) = classifier_over(ScriptedModel::new(RawPrediction::new("POS", 0.9)));
    let texts = vec!["a".to_string(), "b".to_string()];
    let results = classifier.classify_batch(&texts, 0).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.is_ok()));
}

#[test]
fn empty_batch_returns_empty() {
    let (classifier, _) = classifier_over(ScriptedModel::new(RawPrediction::new("POS", 0.9)));
    assert!(classifier.classify_batch(&[], 4).unwrap().is_empty());
}

#[test]
fn model_is_built_once_under_concurrent_first_use() {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&builds);
    let classifier = Arc::new(PolarityClassifier::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::sleep(std::time::Duration::from_millis(20));
        let model: Arc<dyn IPolarityModel> =
            Arc::new(ScriptedModel::new(RawPrediction::new("POS", 0.9)));
        Ok(model)
    }));

    assert!(!classifier.is_loaded());
    assert_eq!(classifier.model_version(), None);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let c = Arc::clone(&classifier);
            thread::spawn(move || c.classify_one("hola").unwrap())
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    classifier
        .classify_batch(&["otra vez".to_string()], 4)
        .unwrap();

    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert!(classifier.is_loaded());
    assert_eq!(classifier.model_version().as_deref(), Some("scripted-v1.0"));
}

#[test]
fn failed_load_is_retried_on_next_call() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let classifier = PolarityClassifier::new(move || {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(ClassifierError::ModelLoadFailed {
                path: "model.onnx".into(),
                reason: "disk hiccup".into(),
            }
            .into());
        }
        let model: Arc<dyn IPolarityModel> =
            Arc::new(ScriptedModel::new(RawPrediction::new("NEG", 0.6)));
        Ok(model)
    });

    let err = classifier.ensure_loaded().err().unwrap();
    assert!(err.is_classifier_unavailable());
    assert!(!classifier.is_loaded());

    let result = classifier.classify_one("malo").unwrap();
    assert_eq!(result.label, Polarity::Negative);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn non_classifier_load_errors_become_unavailable() {
    let classifier =
        PolarityClassifier::new(|| Err(InsightError::ConfigError("no model configured".into())));

    let err = classifier.classify_batch(&["x".to_string()], 1).err().unwrap();
    assert!(matches!(
        err,
        InsightError::ClassifierError(ClassifierError::Unavailable { .. })
    ));
    assert!(err.to_string().contains("no model configured"));
}

proptest! {
    #[test]
    fn weights_always_sum_to_one_with_equal_losers(
        score in 1e-9f64..=1.0,
        label in prop_oneof![Just("POS"), Just("NEG"), Just("NEU"), Just("other")],
    ) {
        let (classifier, _) = classifier_over(ScriptedModel::new(RawPrediction::new(label, score)));
        let result = classifier.classify_one("texto").unwrap();

        prop_assert!((result.weights.sum() - 1.0).abs() <= 1e-9);
        prop_assert_eq!(result.weights.get(result.label), score);
        let losers: Vec<f64> = Polarity::ALL
            .iter()
            .filter(|&&p| p != result.label)
            .map(|&p| result.weights.get(p))
            .collect();
        prop_assert_eq!(losers[0], losers[1]);
        prop_assert_eq!(result.confidence, score);
    }

    #[test]
    fn batch_size_does_not_change_labels(batch_size in 0usize..12) {
        let model = ScriptedModel::new(RawPrediction::new("NEU", 0.5))
            .answer("t1", RawPrediction::new("POS", 0.9))
            .answer("t4", RawPrediction::new("NEG", 0.8))
            .fail_on("t6");
        let (classifier, _) = classifier_over(model);
        let texts: Vec<String> = (0..10).map(|i| format!("t{i}")).collect();

        let reference = classifier.classify_batch(&texts, 1).unwrap();
        let batched = classifier.classify_batch(&texts, batch_size).unwrap();

        prop_assert_eq!(reference.len(), batched.len());
        for (a, b) in reference.iter().zip(&batched) {
            match (a, b) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(a.label, b.label);
                    prop_assert_eq!(a.weights, b.weights);
                    prop_assert_eq!(a.confidence, b.confidence);
                }
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "batching changed success of an item"),
            }
        }
    }
}
