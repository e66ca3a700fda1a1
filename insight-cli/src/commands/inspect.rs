//! Read-mostly commands: stats, show, report, courses, import.

use std::path::Path;

use anyhow::{Context as _, Result};
use insight_core::errors::InsightError;
use insight_core::models::{Axis, AxisResult, LabelCounts, Polarity, Review, ReviewScope};

use super::Context;

pub fn cmd_stats(ctx: &Context) -> Result<()> {
    let stats = ctx.processor()?.stats()?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Review Insight Statistics");
    println!("=========================\n");
    println!("Pending polarity:        {}", stats.pending_polarity);
    println!("Pending categorization:  {}", stats.pending_categorization);
    println!("Model:                   {}", stats.model_version);
    println!("Lexicon:                 {}", stats.lexicon_version);
    Ok(())
}

pub fn cmd_show(ctx: &Context, id: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let analysis = store
        .get_analysis(id)?
        .ok_or_else(|| InsightError::ReviewNotFound { id: id.to_string() })?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let review = &analysis.review;
    println!("Review {}", review.id);
    println!("Teacher:  {}", review.subject_id);
    println!("Course:   {}", review.course_name);
    println!("\n{}\n", if review.text.is_empty() { "(no text)" } else { review.text.as_str() });

    match &analysis.polarity {
        Some(block) => {
            let p = &block.result;
            println!(
                "Polarity: {} ({:.2}) pos={:.3} neu={:.3} neg={:.3} [{}]",
                p.label,
                p.confidence,
                p.weights.positive,
                p.weights.neutral,
                p.weights.negative,
                p.model_version
            );
        }
        None => println!("Polarity: pending"),
    }

    match &analysis.categorization {
        Some(block) => {
            let c = &block.result;
            println!("Categorization [{}]", c.model_version);
            print_axis("teaching quality", &c.teaching_quality);
            print_axis("evaluation", &c.evaluation_method);
            print_axis("empathy", &c.empathy);
        }
        None => println!("Categorization: pending"),
    }
    Ok(())
}

fn print_axis(name: &str, axis: &AxisResult) {
    if axis.matched_terms.is_empty() {
        println!("  {name:<18} {} ({:.2})", axis.label, axis.confidence);
    } else {
        println!(
            "  {name:<18} {} ({:.2}) {}",
            axis.label,
            axis.confidence,
            axis.matched_terms.join(", ")
        );
    }
}

pub fn cmd_report(ctx: &Context, subject: Option<i64>, course: Option<String>) -> Result<()> {
    let scope = match (subject, course) {
        (Some(id), _) => ReviewScope::BySubject(id),
        (None, Some(course)) => ReviewScope::ByCourse(course),
        (None, None) => anyhow::bail!("either --subject or --course is required"),
    };
    let report = ctx.open_store()?.scope_report(&scope)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let title = match &report.scope {
        ReviewScope::BySubject(id) => format!("Teacher {id}"),
        ReviewScope::ByCourse(course) => format!("Course \"{course}\""),
        ReviewScope::All => "All reviews".to_string(),
    };
    println!("{title}");
    println!("{}\n", "=".repeat(title.chars().count()));

    if report.total == 0 {
        println!("No reviews found.");
        return Ok(());
    }

    println!("Reviews:         {}", report.total);
    println!(
        "Polarity:        {} ({:.1}%)",
        report.polarity_done,
        report.polarity_done_rate() * 100.0
    );
    println!(
        "Categorization:  {} ({:.1}%)",
        report.categorization_done,
        report.categorization_done_rate() * 100.0
    );

    if report.polarity_done > 0 {
        println!("\n--- Polarity ---");
        print_distribution("", &report.polarity);
    }
    if report.categorization_done > 0 {
        println!("\n--- Categorization ---");
        for axis in Axis::ALL {
            println!("{axis}");
            print_distribution("  ", report.axis(axis));
        }
    }
    Ok(())
}

fn print_distribution(indent: &str, counts: &LabelCounts) {
    for label in Polarity::ALL {
        println!(
            "{indent}{:<10} {:>5} ({:.1}%)",
            label.as_str(),
            counts.get(label),
            counts.share(label) * 100.0
        );
    }
}

pub fn cmd_courses(ctx: &Context, limit: usize) -> Result<()> {
    let courses = ctx.open_store()?.course_counts(limit)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
        return Ok(());
    }

    println!("{:<4} {:<55} {:>8}", "#", "Course", "Reviews");
    println!("{}", "-".repeat(69));
    for (rank, course) in courses.iter().enumerate() {
        println!("{:<4} {:<55} {:>8}", rank + 1, course.course_name, course.reviews);
    }
    let total: usize = courses.iter().map(|c| c.reviews).sum();
    println!("\nTotal: {} courses, {total} reviews", courses.len());
    Ok(())
}

/// Insert reviews from a JSON array of `{id, text, subject_id, course_name}`.
pub fn cmd_import(ctx: &Context, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let reviews: Vec<Review> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of reviews", file.display()))?;

    let inserted = ctx.open_store()?.insert_reviews(&reviews)?;
    tracing::info!(inserted, file = %file.display(), "reviews imported");

    if ctx.json {
        println!("{}", serde_json::json!({ "inserted": inserted }));
    } else {
        println!("Imported {inserted} reviews from {}", file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::config::InsightConfig;
    use insight_core::models::PendingKind;
    use insight_core::traits::IReviewGateway;

    fn context(dir: &tempfile::TempDir) -> Context {
        let mut config = InsightConfig::default();
        config.storage.db_path = dir.path().join("cli.db").display().to_string();
        Context {
            config,
            json: true,
        }
    }

    #[test]
    fn import_then_stats_and_show() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        let file = dir.path().join("reviews.json");
        std::fs::write(
            &file,
            r#"[
                {"id": "a", "text": "Explica bien", "subject_id": 3, "course_name": "Cálculo"},
                {"id": "b", "subject_id": 4}
            ]"#,
        )
        .unwrap();

        cmd_import(&ctx, &file).unwrap();
        cmd_stats(&ctx).unwrap();
        cmd_show(&ctx, "b").unwrap();

        let store = ctx.open_store().unwrap();
        assert_eq!(store.count_pending(PendingKind::Polarity).unwrap(), 2);
        assert_eq!(store.get_review("b").unwrap().unwrap().text, "");
    }

    #[test]
    fn report_and_courses_read_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(&dir);
        ctx.open_store()
            .unwrap()
            .insert_reviews(&[
                Review::new("a", "Explica bien", 3, "Cálculo I"),
                Review::new("b", "Muy estricto", 3, "Cálculo II"),
            ])
            .unwrap();

        cmd_report(&ctx, Some(3), None).unwrap();
        cmd_courses(&ctx, 5).unwrap();
        ctx.json = false;
        cmd_report(&ctx, None, Some("cálculo".into())).unwrap();
        cmd_courses(&ctx, 5).unwrap();
    }

    #[test]
    fn report_with_blank_course_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = cmd_report(&context(&dir), None, Some(" ".into())).unwrap_err();
        assert!(err.to_string().contains("blank"));
    }

    #[test]
    fn show_unknown_review_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = cmd_show(&context(&dir), "ghost").unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn import_rejects_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.json");
        std::fs::write(&file, "{\"id\": 1}").unwrap();
        assert!(cmd_import(&context(&dir), &file).is_err());
    }
}
