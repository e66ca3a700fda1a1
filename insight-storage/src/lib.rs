//! # insight-storage
//!
//! SQLite persistence for reviews and their polarity / categorization blocks.
//! One write connection, a small round-robin read pool, versioned migrations.

pub mod engine;
pub mod functions;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use insight_core::errors::{InsightError, StorageError};

/// Wrap a SQLite failure message in the workspace error type.
pub fn to_storage_err(message: String) -> InsightError {
    InsightError::StorageError(StorageError::SqliteError { message })
}
