//! Versioned schema migrations tracked in `schema_version`.

pub mod v001_reviews_schema;

use rusqlite::{params, Connection};
use tracing::info;

use insight_core::errors::{InsightResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> InsightResult<()>;

const MIGRATIONS: &[(u32, &str, MigrationFn)] =
    &[(1, "reviews_schema", v001_reviews_schema::migrate)];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the recorded schema version.
/// Each migration runs in its own transaction together with its version row.
pub fn run_migrations(conn: &Connection) -> InsightResult<u32> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for &(version, name, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        let failed = |reason: String| StorageError::MigrationFailed { version, reason };

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(e.to_string()))?;
        migrate(&tx).map_err(|e| failed(e.to_string()))?;
        tx.execute(
            "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
            params![version, name],
        )
        .map_err(|e| failed(e.to_string()))?;
        tx.commit().map_err(|e| failed(e.to_string()))?;

        info!(version, name, "applied migration");
    }

    current_version(conn)
}

/// Highest applied schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> InsightResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
