//! Coverage and label distribution over stored verdicts.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};
use tracing::debug;

use insight_core::errors::InsightResult;
use insight_core::models::{Axis, CourseCount, LabelCounts, Polarity, ReviewScope, ScopeReport};

use super::sql_count;
use crate::to_storage_err;

/// `WHERE` fragment selecting `scope`, with its bound value (always `?1`).
fn scope_filter(scope: &ReviewScope) -> (&'static str, Vec<Value>) {
    match scope {
        ReviewScope::All => ("1 = 1", Vec::new()),
        ReviewScope::BySubject(subject_id) => ("subject_id = ?1", vec![Value::Integer(*subject_id)]),
        ReviewScope::ByCourse(course) => (
            "contains_ci(course_name, ?1)",
            vec![Value::Text(course.clone())],
        ),
    }
}

pub fn scope_report(conn: &Connection, scope: &ReviewScope) -> InsightResult<ScopeReport> {
    let (filter, args) = scope_filter(scope);
    let mut report = ScopeReport::empty(scope.clone());

    let sql = format!(
        "SELECT COUNT(*), COALESCE(SUM(polarity_completed), 0), \
         COALESCE(SUM(categorization_completed), 0) FROM reviews WHERE {filter}"
    );
    let (total, polarity_done, categorization_done): (i64, i64, i64) = conn
        .query_row(&sql, params_from_iter(args.iter()), |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    report.total = to_count(total);
    report.polarity_done = to_count(polarity_done);
    report.categorization_done = to_count(categorization_done);

    if report.polarity_done > 0 {
        count_labels(
            conn,
            (filter, &args),
            "polarity_completed",
            "json_extract(polarity, '$.label')",
            &mut report.polarity,
        )?;
    }
    if report.categorization_done > 0 {
        for axis in Axis::ALL {
            // Axis names are fixed identifiers.
            let label = format!("json_extract(categorization, '$.{}.label')", axis.as_str());
            count_labels(
                conn,
                (filter, &args),
                "categorization_completed",
                &label,
                report.axis_mut(axis),
            )?;
        }
    }
    Ok(report)
}

fn count_labels(
    conn: &Connection,
    (filter, args): (&str, &[Value]),
    completed_flag: &str,
    label_expr: &str,
    counts: &mut LabelCounts,
) -> InsightResult<()> {
    let sql = format!(
        "SELECT {label_expr} AS label, COUNT(*) FROM reviews \
         WHERE {completed_flag} = 1 AND {filter} GROUP BY label"
    );
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| {
            Ok((row.get::<_, Option<String>>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    for row in rows {
        let (raw, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        match raw.as_deref().and_then(Polarity::parse) {
            Some(label) => counts.add(label, to_count(count)),
            None => debug!(label = ?raw, count, "stored verdict has no known label"),
        }
    }
    Ok(())
}

/// Reviews per course, largest first. Blank and placeholder names are left out.
pub fn course_counts(conn: &Connection, limit: usize) -> InsightResult<Vec<CourseCount>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT course_name, COUNT(*) AS reviews FROM reviews \
             WHERE TRIM(course_name) NOT IN ('', '---', 'N/A') \
             GROUP BY course_name ORDER BY reviews DESC, course_name LIMIT ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![sql_count(limit)], |row| {
            Ok(CourseCount {
                course_name: row.get(0)?,
                reviews: to_count(row.get(1)?),
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn to_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}
