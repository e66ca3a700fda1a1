pub mod classifier_config;
pub mod defaults;
pub mod lexicon_config;
pub mod observability_config;
pub mod pipeline_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use classifier_config::ClassifierConfig;
pub use lexicon_config::{AxisTerms, LexiconConfig};
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use storage_config::StorageConfig;

use crate::errors::{InsightError, InsightResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub storage: StorageConfig,
    pub classifier: ClassifierConfig,
    pub lexicon: LexiconConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl InsightConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> InsightResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InsightError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw).map_err(|e| InsightError::ConfigError(e.to_string()))
    }

    /// Apply `INSIGHT_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> InsightResult<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `INSIGHT_*` overrides from an arbitrary lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> InsightResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("INSIGHT_DB_PATH") {
            self.storage.db_path = path;
        }
        if let Some(path) = lookup("INSIGHT_MODEL_PATH") {
            self.classifier.model_path = Some(path);
        }
        if let Some(path) = lookup("INSIGHT_TOKENIZER_PATH") {
            self.classifier.tokenizer_path = Some(path);
        }
        if let Some(name) = lookup("INSIGHT_MODEL_NAME") {
            self.classifier.model_name = name;
        }
        if let Some(raw) = lookup("INSIGHT_BATCH_SIZE") {
            self.pipeline.batch_size = raw.trim().parse().map_err(|_| {
                InsightError::ConfigError(format!("INSIGHT_BATCH_SIZE is not a number: {raw}"))
            })?;
        }
        Ok(())
    }
}
