//! Read/write contract over the `user_activity` table.
//!
//! Passes and queries only talk to the table through [`RecordStore`], so they can be driven by
//! any connection that holds the schema.

use crate::constants::ACTIVITY_TABLE;
use crate::models::is_blank_or_placeholder;
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params, params_from_iter, Connection, Result};

/// A full table row rendered as text; `None` is SQL NULL.
pub type Row = Vec<Option<String>>;

/// Columns that passes are allowed to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WindowTitle,
    ApplicationProcess,
    ActivityCategory,
}

impl Field {
    pub fn column(self) -> &'static str {
        match self {
            Field::WindowTitle => "WindowTitle",
            Field::ApplicationProcess => "ApplicationProcess",
            Field::ActivityCategory => "ActivityCategory",
        }
    }
}

/// A row whose title or process needs repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankCandidate {
    pub id: i64,
    pub window_title: Option<String>,
    pub application_process: Option<String>,
}

/// The inputs and current output of classification for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRow {
    pub id: i64,
    pub application_process: Option<String>,
    pub activity_category: Option<String>,
}

/// The columns aggregation reads for one row inside a query window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRow {
    pub window_title: Option<String>,
    pub start_time: Option<String>,
    pub duration_secs: Option<f64>,
}

impl WindowRow {
    pub fn new(window_title: &str, start_time: &str, duration_secs: f64) -> Self {
        Self {
            window_title: Some(window_title.to_string()),
            start_time: Some(start_time.to_string()),
            duration_secs: Some(duration_secs),
        }
    }
}

pub trait RecordStore {
    /// Column names in table order.
    fn list_all_columns(&self) -> Result<Vec<String>>;

    /// Every row, with values in column order.
    fn list_all_rows(&self) -> Result<Vec<Row>>;

    /// Rows whose WindowTitle or ApplicationProcess is blank or the placeholder.
    fn select_blank_or_placeholder(&self) -> Result<Vec<BlankCandidate>>;

    /// Process name and current category of every row.
    fn select_processes(&self) -> Result<Vec<ProcessRow>>;

    /// Overwrite the given fields of one row.
    fn update_fields(&self, id: i64, fields: &[(Field, &str)]) -> Result<()>;

    /// Rows with `start <= StartTime <= end`, compared as text.
    fn select_rows_in_window(&self, start: &str, end: &str) -> Result<Vec<WindowRow>>;
}

fn value_to_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    }
}

// Text durations are coerced the way SQLite's SUM would; anything else is a defect.
#[allow(
    clippy::as_conversions,
    clippy::cast_precision_loss,
    reason = "second counts are far below 2^52"
)]
fn value_to_seconds(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Real(f) => Some(f),
        ValueRef::Integer(i) => Some(i as f64),
        ValueRef::Text(t) => std::str::from_utf8(t).ok()?.trim().parse().ok(),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

impl RecordStore for Connection {
    fn list_all_columns(&self) -> Result<Vec<String>> {
        let mut stmt = self.prepare(&format!("PRAGMA table_info({ACTIVITY_TABLE})"))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
        rows.collect()
    }

    fn list_all_rows(&self) -> Result<Vec<Row>> {
        let mut stmt = self.prepare(&format!("SELECT * FROM {ACTIVITY_TABLE} ORDER BY id"))?;
        let column_count = stmt.column_count();

        let rows = stmt.query_map([], |row| {
            (0..column_count)
                .map(|i| row.get_ref(i).map(value_to_text))
                .collect::<Result<Row>>()
        })?;

        rows.collect()
    }

    fn select_blank_or_placeholder(&self) -> Result<Vec<BlankCandidate>> {
        let mut stmt = self.prepare(&format!(
            "SELECT id, WindowTitle, ApplicationProcess FROM {ACTIVITY_TABLE} ORDER BY id"
        ))?;

        let rows = stmt.query_map([], |row| {
            Ok(BlankCandidate {
                id: row.get(0)?,
                window_title: value_to_text(row.get_ref(1)?),
                application_process: value_to_text(row.get_ref(2)?),
            })
        })?;

        // SQLite's TRIM only strips spaces, so the blank test runs here instead of in SQL
        let mut candidates = Vec::new();
        for row in rows {
            let row = row?;
            if is_blank_or_placeholder(row.window_title.as_deref())
                || is_blank_or_placeholder(row.application_process.as_deref())
            {
                candidates.push(row);
            }
        }
        Ok(candidates)
    }

    fn select_processes(&self) -> Result<Vec<ProcessRow>> {
        let mut stmt = self.prepare(&format!(
            "SELECT id, ApplicationProcess, ActivityCategory FROM {ACTIVITY_TABLE} ORDER BY id"
        ))?;

        let rows = stmt.query_map([], |row| {
            Ok(ProcessRow {
                id: row.get(0)?,
                application_process: value_to_text(row.get_ref(1)?),
                activity_category: value_to_text(row.get_ref(2)?),
            })
        })?;

        rows.collect()
    }

    fn update_fields(&self, id: i64, fields: &[(Field, &str)]) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }

        let assignments = fields
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("{} = ?{}", field.column(), i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {ACTIVITY_TABLE} SET {assignments} WHERE id = ?{}",
            fields.len() + 1
        );

        let values = fields
            .iter()
            .map(|(_, value)| Value::Text((*value).to_string()))
            .chain(std::iter::once(Value::Integer(id)));

        self.execute(&sql, params_from_iter(values))?;
        Ok(())
    }

    fn select_rows_in_window(&self, start: &str, end: &str) -> Result<Vec<WindowRow>> {
        let mut stmt = self.prepare(&format!(
            "SELECT WindowTitle, StartTime, DurationSec FROM {ACTIVITY_TABLE}
             WHERE StartTime >= ?1 AND StartTime <= ?2
             ORDER BY id"
        ))?;

        let rows = stmt.query_map(params![start, end], |row| {
            Ok(WindowRow {
                window_title: value_to_text(row.get_ref(0)?),
                start_time: value_to_text(row.get_ref(1)?),
                duration_secs: value_to_seconds(row.get_ref(2)?),
            })
        })?;

        rows.collect()
    }
}
