//! v001: reviews table with polarity and categorization blocks.

use rusqlite::Connection;

use insight_core::errors::InsightResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> InsightResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reviews (
            id                        TEXT PRIMARY KEY,
            text                      TEXT NOT NULL DEFAULT '',
            subject_id                INTEGER NOT NULL,
            course_name               TEXT NOT NULL DEFAULT '',
            created_at                TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            polarity_completed        INTEGER NOT NULL DEFAULT 0,
            polarity                  TEXT,
            categorization_completed  INTEGER NOT NULL DEFAULT 0,
            categorization            TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_reviews_polarity_pending
            ON reviews(polarity_completed);
        CREATE INDEX IF NOT EXISTS idx_reviews_categorization_pending
            ON reviews(categorization_completed);
        CREATE INDEX IF NOT EXISTS idx_reviews_subject ON reviews(subject_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
