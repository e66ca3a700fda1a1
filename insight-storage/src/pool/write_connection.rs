//! The single write connection, serialized behind a mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use insight_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use insight_core::errors::InsightResult;

use super::pragmas::apply_pragmas;
use crate::functions::register_functions;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> InsightResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::prepare(conn, busy_timeout_ms)
    }

    pub fn open_in_memory() -> InsightResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::prepare(conn, DEFAULT_BUSY_TIMEOUT_MS)
    }

    fn prepare(conn: Connection, busy_timeout_ms: u32) -> InsightResult<Self> {
        apply_pragmas(&conn, busy_timeout_ms)?;
        register_functions(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the write connection.
    pub fn with_conn<F, T>(&self, f: F) -> InsightResult<T>
    where
        F: FnOnce(&Connection) -> InsightResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("writer lock poisoned: {e}")))?;
        f(&guard)
    }
}
