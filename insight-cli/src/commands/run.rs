//! Commands that drive the processor.

use anyhow::Result;

use insight_core::constants::{LEXICON_VERSION, MODEL_NOT_LOADED};
use insight_core::models::{PendingKind, RunSummary};
use insight_core::traits::IReviewGateway;
use insight_pipeline::Processor;
use insight_storage::StorageEngine;

use super::{print_summary, resolve_limit, Context};

fn pending(processor: &Processor<StorageEngine>, kind: PendingKind) -> Result<usize> {
    Ok(processor.gateway().count_pending(kind)?)
}

fn report(
    ctx: &Context,
    title: &str,
    processor: &Processor<StorageEngine>,
    summary: &RunSummary,
) -> Result<()> {
    let model = processor
        .classifier()
        .model_version()
        .unwrap_or_else(|| MODEL_NOT_LOADED.to_string());
    print_summary(ctx, title, summary, &model)
}

pub fn cmd_analyze(
    ctx: &Context,
    limit: Option<i64>,
    skip: usize,
    batch_size: Option<usize>,
) -> Result<()> {
    let processor = ctx.processor()?;
    let limit = resolve_limit(limit, || pending(&processor, PendingKind::Polarity))?;
    let batch_size = batch_size.unwrap_or(processor.config().batch_size);

    let summary = processor.run_pending(limit, skip, batch_size)?;
    report(ctx, "Pending reviews", &processor, &summary)
}

pub fn cmd_subject(
    ctx: &Context,
    subject_id: i64,
    limit: Option<i64>,
    batch_size: Option<usize>,
) -> Result<()> {
    let processor = ctx.processor()?;
    let limit = resolve_limit(limit, || pending(&processor, PendingKind::Polarity))?;
    let batch_size = batch_size.unwrap_or(processor.config().batch_size);

    let summary = processor.run_for_subject(subject_id, limit, batch_size)?;
    report(ctx, &format!("Teacher {subject_id}"), &processor, &summary)
}

pub fn cmd_course(
    ctx: &Context,
    course: &str,
    limit: Option<i64>,
    batch_size: Option<usize>,
) -> Result<()> {
    let processor = ctx.processor()?;
    let limit = resolve_limit(limit, || pending(&processor, PendingKind::Polarity))?;
    let batch_size = batch_size.unwrap_or(processor.config().batch_size);

    let summary = processor.run_for_course(course, limit, batch_size)?;
    report(ctx, &format!("Course \"{course}\""), &processor, &summary)
}

pub fn cmd_categorize(ctx: &Context, limit: Option<i64>, batch_size: Option<usize>) -> Result<()> {
    let processor = ctx.processor()?;
    let limit = resolve_limit(limit, || pending(&processor, PendingKind::Categorization))?;
    let batch_size = batch_size.unwrap_or(processor.config().backfill_batch_size);

    let summary = processor.run_categorization_backfill(limit, batch_size)?;
    print_summary(ctx, "Categorization backfill", &summary, LEXICON_VERSION)
}
