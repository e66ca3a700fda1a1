use std::collections::HashMap;

use insight_core::config::*;
use insight_core::models::Axis;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = InsightConfig::from_toml("").unwrap();

    // Storage defaults
    assert_eq!(config.storage.db_path, "insight.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.storage.read_pool_size, 4);

    // Classifier defaults
    assert_eq!(config.classifier.provider, "onnx");
    assert_eq!(
        config.classifier.model_name,
        "dccuchile/bert-base-spanish-wwm-cased"
    );
    assert_eq!(config.classifier.labels, vec!["LABEL_0", "LABEL_1", "LABEL_2"]);
    assert_eq!(config.classifier.max_input_chars, 512);
    assert_eq!(config.classifier.max_tokens, 512);
    assert!(config.classifier.model_path.is_none());

    // Pipeline defaults
    assert_eq!(config.pipeline.batch_size, 8);
    assert_eq!(config.pipeline.backfill_batch_size, 50);

    // Lexicon: no overrides
    assert!(Axis::ALL
        .iter()
        .all(|&axis| config.lexicon.override_for(axis).is_none()));

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/data/reviews.db"

[classifier]
model_path = "/models/sentiment.onnx"
labels = ["NEG", "NEU", "POS"]

[lexicon.empathy]
positive = ["amable"]
negative = ["grosero", "arrogante"]
"#;
    let config = InsightConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/data/reviews.db");
    assert_eq!(config.storage.read_pool_size, 4); // default
    assert_eq!(
        config.classifier.model_path.as_deref(),
        Some("/models/sentiment.onnx")
    );
    assert_eq!(config.classifier.labels, vec!["NEG", "NEU", "POS"]);

    let empathy = config.lexicon.override_for(Axis::Empathy).unwrap();
    assert_eq!(empathy.positive, vec!["amable"]);
    assert_eq!(empathy.negative, vec!["grosero", "arrogante"]);
    assert!(config.lexicon.override_for(Axis::TeachingQuality).is_none());
}

#[test]
fn config_rejects_wrong_types() {
    let result = InsightConfig::from_toml("[pipeline]\nbatch_size = \"eight\"\n");
    assert!(result.is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = InsightConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = InsightConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(roundtripped.classifier.labels, config.classifier.labels);
    assert_eq!(roundtripped.pipeline.batch_size, config.pipeline.batch_size);
}

#[test]
fn overrides_apply_from_lookup() {
    let env: HashMap<&str, &str> = [
        ("INSIGHT_DB_PATH", "/tmp/override.db"),
        ("INSIGHT_MODEL_PATH", "/models/m.onnx"),
        ("INSIGHT_TOKENIZER_PATH", "/models/tokenizer.json"),
        ("INSIGHT_BATCH_SIZE", " 16 "),
    ]
    .into_iter()
    .collect();

    let mut config = InsightConfig::default();
    config
        .apply_overrides_from(|key| env.get(key).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.storage.db_path, "/tmp/override.db");
    assert_eq!(config.classifier.model_path.as_deref(), Some("/models/m.onnx"));
    assert_eq!(
        config.classifier.tokenizer_path.as_deref(),
        Some("/models/tokenizer.json")
    );
    assert_eq!(config.pipeline.batch_size, 16);
    // Untouched
    assert_eq!(
        config.classifier.model_name,
        "dccuchile/bert-base-spanish-wwm-cased"
    );
}

#[test]
fn non_numeric_batch_size_override_is_a_config_error() {
    let mut config = InsightConfig::default();
    let err = config
        .apply_overrides_from(|key| (key == "INSIGHT_BATCH_SIZE").then(|| "lots".to_string()))
        .unwrap_err();
    assert!(err.to_string().contains("INSIGHT_BATCH_SIZE"));
    assert_eq!(config.pipeline.batch_size, 8);
}

#[test]
fn from_file_reports_missing_file() {
    let err = InsightConfig::from_file(std::path::Path::new("/nonexistent/insight.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/insight.toml"));
}
