//! The persisted slot: one row of `kv_store` holding the whole register as a
//! JSON array.

use super::log::ttlog;
use super::pool::DbPool;
use crate::core::store::Slot;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub const ATTENDANCE_KEY: &str = "attendanceData";

pub struct SqliteSlot {
    pool: DbPool,
    key: String,
}

impl SqliteSlot {
    pub fn new(pool: DbPool) -> Self {
        Self::with_key(pool, ATTENDANCE_KEY)
    }

    pub fn with_key(pool: DbPool, key: &str) -> Self {
        Self {
            pool,
            key: key.to_string(),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl Slot for SqliteSlot {
    fn read(&self) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [&self.key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, payload: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.key, payload, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            tracing::warn!(error = %e, operation, "failed to write internal log");
        }
    }
}
