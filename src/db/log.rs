use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};
use std::path::Path;

use super::pool::DbPool;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Record an operation in the audit log without failing the caller.
///
/// A missing directory or locked database only produces a warning; the
/// lookup that triggered the write has already succeeded.
pub fn record(db_path: &Path, operation: &str, target: &str, message: &str) {
    let result = DbPool::open_ready(db_path)
        .and_then(|pool| ttlog(&pool.conn, operation, target, message));

    if let Err(e) = result {
        warning(format!("Failed to write audit log ({}): {}", db_path.display(), e));
    }
}
