//! Cleans, categorizes and summarizes a local desktop activity log.
//!
//! The activity table is repaired by [`normalizer`], labelled by [`categorizer`], audited by
//! [`diagnostics`] and summarized per day by [`stats`], which [`api`] serves over HTTP.

pub mod api;
pub mod categorizer;
pub mod config;
pub mod constants;
pub mod db;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod stats;
pub mod validation;
#[cfg(test)]
mod test_utils;

use crate::db::{migrations, Database};
use crate::error::AppResult;
use std::path::Path;

/// Open the database at `path` and make sure the activity table exists.
pub fn init_database(path: &Path) -> AppResult<Database> {
    let db = Database::open(path)?;
    migrations::run(db.connection())?;
    log::info!("Database opened at {}", path.display());
    Ok(db)
}
