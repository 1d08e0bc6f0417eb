//! Shared test utilities.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use crate::db::{migrations, Database};
use crate::models::ActivityRecord;
use rusqlite::Connection;
use tempfile::{tempdir, TempDir};

/// Create a temporary test database with migrations applied.
///
/// Returns a tuple of (Database, TempDir). The TempDir must be kept alive
/// for the duration of the test to prevent the database file from being deleted.
pub fn setup_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory for test DB");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    migrations::run(db.connection()).expect("Failed to run migrations on test DB");
    (db, dir)
}

/// Insert an activity row and return its id.
pub fn insert_activity(
    conn: &Connection,
    window_title: &str,
    application_process: &str,
    start_time: &str,
    duration_secs: f64,
) -> i64 {
    let mut record =
        ActivityRecord::new(window_title, application_process, start_time, start_time, duration_secs);
    record.save(conn).expect("Failed to insert test activity");
    record.id.expect("Saved activity has an id")
}
