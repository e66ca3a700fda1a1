use insight_core::errors::*;

#[test]
fn insight_error_review_not_found_carries_id() {
    let err = InsightError::ReviewNotFound {
        id: "rev-123".into(),
    };
    assert!(err.to_string().contains("rev-123"));
}

#[test]
fn insight_error_invalid_input_carries_reason() {
    let err = InsightError::InvalidInput {
        reason: "empty text".into(),
    };
    assert!(err.to_string().contains("empty text"));
}

// --- From impls ---

#[test]
fn classifier_error_converts_to_insight_error() {
    let err: InsightError = ClassifierError::InferenceFailed {
        reason: "bad tensor".into(),
    }
    .into();
    assert!(matches!(err, InsightError::ClassifierError(_)));
    assert!(!err.is_classifier_unavailable());
}

#[test]
fn storage_error_converts_to_insight_error() {
    let err: InsightError = StorageError::SqliteError {
        message: "disk full".into(),
    }
    .into();
    assert!(matches!(err, InsightError::StorageError(_)));
}

#[test]
fn serialization_error_converts_to_insight_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: InsightError = json_err.into();
    assert!(matches!(err, InsightError::SerializationError(_)));
}

// --- Classifier availability ---

#[test]
fn unavailable_and_load_failures_are_classifier_unavailable() {
    let unavailable: InsightError = ClassifierError::Unavailable {
        reason: "no model_path".into(),
    }
    .into();
    let load_failed: InsightError = ClassifierError::ModelLoadFailed {
        path: "/models/m.onnx".into(),
        reason: "file not found".into(),
    }
    .into();
    assert!(unavailable.is_classifier_unavailable());
    assert!(load_failed.is_classifier_unavailable());
    assert!(load_failed.to_string().contains("/models/m.onnx"));
}

// --- Sub-error variants carry context ---

#[test]
fn invalid_score_carries_value() {
    let err = ClassifierError::InvalidScore { score: 1.5 };
    assert!(err.to_string().contains("1.5"));
}

#[test]
fn batch_length_mismatch_carries_sizes() {
    let err = ClassifierError::BatchLengthMismatch {
        expected: 8,
        actual: 7,
    };
    let msg = err.to_string();
    assert!(msg.contains('8'));
    assert!(msg.contains('7'));
}

#[test]
fn migration_failed_carries_version() {
    let err = StorageError::MigrationFailed {
        version: 2,
        reason: "syntax error".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains("syntax error"));
}
