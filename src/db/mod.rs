pub mod kv;
pub mod log;
pub mod migrate;
pub mod pool;

pub use kv::{ATTENDANCE_KEY, SqliteSlot};
pub use pool::DbPool;

use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    migrate::run_pending_migrations(conn)?;
    Ok(())
}
