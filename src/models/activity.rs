use crate::constants::PLACEHOLDER;
use rusqlite::{params, Connection, Result};

/// One row of `user_activity`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: Option<i64>,
    pub window_title: Option<String>,
    pub application_process: Option<String>,
    pub activity_category: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration_secs: Option<f64>,
}

/// True when a title or process value is missing, blank, or the "Unknown" placeholder.
pub fn is_blank_or_placeholder(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None => true,
        Some(v) => v.is_empty() || v.eq_ignore_ascii_case(PLACEHOLDER),
    }
}

impl ActivityRecord {
    pub fn new(
        window_title: &str,
        application_process: &str,
        start_time: &str,
        end_time: &str,
        duration_secs: f64,
    ) -> Self {
        Self {
            id: None,
            window_title: Some(window_title.to_string()),
            application_process: Some(application_process.to_string()),
            activity_category: None,
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
            duration_secs: Some(duration_secs),
        }
    }

    pub fn save(&mut self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO user_activity (WindowTitle, ApplicationProcess, ActivityCategory, StartTime, EndTime, DurationSec)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                self.window_title,
                self.application_process,
                self.activity_category,
                self.start_time,
                self.end_time,
                self.duration_secs,
            ],
        )?;
        self.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, WindowTitle, ApplicationProcess, ActivityCategory, StartTime, EndTime, DurationSec
             FROM user_activity WHERE id = ?1",
        )?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(Self {
                id: Some(row.get(0)?),
                window_title: row.get(1)?,
                application_process: row.get(2)?,
                activity_category: row.get(3)?,
                start_time: row.get(4)?,
                end_time: row.get(5)?,
                duration_secs: row.get(6)?,
            }))
        } else {
            Ok(None)
        }
    }
}
