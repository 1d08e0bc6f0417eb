// src/db/helpers.rs

use crate::db::Database;
use crate::error::{AppError, AppResult};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Execute a database operation with proper lock handling and error logging.
///
/// # Example
/// ```ignore
/// with_connection(&db, "load activity summary", |conn| {
///     summarize_day(conn, date, limit)
/// })
/// ```
pub fn with_connection<F, T>(db: &Arc<Mutex<Database>>, operation: &str, f: F) -> AppResult<T>
where
    F: FnOnce(&Connection) -> AppResult<T>,
{
    let db = db.lock().map_err(|e| {
        log::error!("Failed to acquire database lock for {operation}: {e}");
        AppError::LockPoisoned
    })?;

    f(db.connection()).inspect_err(|e| {
        log::error!("Failed to {operation}: {e}");
    })
}
