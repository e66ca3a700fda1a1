//! Scalar SQL functions registered on every connection.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use insight_core::errors::InsightResult;

use crate::to_storage_err;

/// Register `contains_ci(haystack, needle)`: Unicode-aware case-insensitive
/// substring test. NULL on either side is false.
pub fn register_functions(conn: &Connection) -> InsightResult<()> {
    conn.create_scalar_function(
        "contains_ci",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let haystack: Option<String> = ctx.get(0)?;
            let needle: Option<String> = ctx.get(1)?;
            Ok(match (haystack, needle) {
                (Some(h), Some(n)) => contains_ci(&h, &n),
                _ => false,
            })
        },
    )
    .map_err(|e| to_storage_err(format!("register contains_ci: {e}")))
}

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
