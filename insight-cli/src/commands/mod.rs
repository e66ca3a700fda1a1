//! CLI command implementations

mod inspect;
mod run;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use serde_json::json;

use insight_core::config::InsightConfig;
use insight_core::models::RunSummary;
use insight_lexicon::LexiconScorer;
use insight_pipeline::Processor;
use insight_polarity::PolarityClassifier;
use insight_storage::StorageEngine;

pub use inspect::{cmd_courses, cmd_import, cmd_report, cmd_show, cmd_stats};
pub use run::{cmd_analyze, cmd_categorize, cmd_course, cmd_subject};

/// Effective configuration plus output options shared by every command.
pub struct Context {
    pub config: InsightConfig,
    pub json: bool,
}

impl Context {
    /// Read `path` (or start from defaults) and apply `INSIGHT_*` overrides.
    pub fn load(path: Option<&Path>, json: bool) -> Result<Self> {
        let mut config = match path {
            Some(path) => InsightConfig::from_file(path)?,
            None => InsightConfig::default(),
        };
        config.apply_env_overrides()?;
        Ok(Self { config, json })
    }

    pub fn open_store(&self) -> Result<StorageEngine> {
        let storage = &self.config.storage;
        StorageEngine::open_with_config(Path::new(&storage.db_path), storage)
            .with_context(|| format!("Failed to open review store at {}", storage.db_path))
    }

    pub fn processor(&self) -> Result<Processor<StorageEngine>> {
        let classifier = Arc::new(PolarityClassifier::from_config(&self.config.classifier));
        let scorer = LexiconScorer::from_config(&self.config.lexicon);
        Ok(
            Processor::new(self.open_store()?, classifier, scorer)
                .with_config(self.config.pipeline.clone()),
        )
    }
}

/// A positive request is taken as is; anything else means every pending review.
pub(crate) fn resolve_limit<F>(requested: Option<i64>, pending: F) -> Result<usize>
where
    F: FnOnce() -> Result<usize>,
{
    match requested.and_then(|n| usize::try_from(n).ok()) {
        Some(n) if n > 0 => Ok(n),
        _ => pending(),
    }
}

pub(crate) fn print_summary(
    ctx: &Context,
    title: &str,
    summary: &RunSummary,
    scorer: &str,
) -> Result<()> {
    if ctx.json {
        let body = json!({
            "summary": serde_json::to_value(summary)?,
            "scorer_version": scorer,
        });
        println!("{body:#}");
        return Ok(());
    }

    println!("{title}");
    println!("{}\n", "=".repeat(title.chars().count()));
    println!("Scorer:         {scorer}");
    println!("Processed:      {}", summary.processed);
    println!("Succeeded:      {}", summary.succeeded);
    println!("Failed:         {}", summary.failed);
    if summary.processed > 0 {
        println!("Success rate:   {:.1}%", summary.success_rate * 100.0);
    }
    println!("Elapsed:        {} ms", summary.elapsed_ms);

    for failure in summary.failures.iter().take(10) {
        println!("  - {}: {}", failure.review_id, failure.reason);
    }
    if summary.failures.len() > 10 {
        println!("  ... and {} more", summary.failures.len() - 10);
    }
    Ok(())
}
