pub mod backup;
pub mod cameras;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod restore;
pub mod scan;
pub mod stats;

use crate::config::Config;
use crate::core::RecordStore;
use crate::db::{DbPool, SqliteSlot};
use crate::errors::AppResult;

/// Open the configured database and load the register from it.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteSlot>> {
    let pool = DbPool::new(&cfg.database)?;
    Ok(RecordStore::load(SqliteSlot::new(pool)))
}
