//! Data-quality audit: how often each column is blank.

use crate::db::{RecordStore, Row};
use crate::error::AppResult;
use serde::Serialize;
use std::fmt;

const DURATION_COLUMN: &str = "DurationSec";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnBlanks {
    pub column: String,
    pub blank_count: usize,
    pub blank_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlankReport {
    pub total_rows: usize,
    pub columns: Vec<ColumnBlanks>,
    /// Column with the most blanks; the first such column on ties.
    pub most_missing: Option<ColumnBlanks>,
    pub negative_durations: usize,
}

fn is_blank(value: Option<&Option<String>>) -> bool {
    match value {
        Some(Some(v)) => v.trim().is_empty(),
        Some(None) | None => true,
    }
}

#[allow(
    clippy::as_conversions,
    clippy::cast_precision_loss,
    reason = "row counts are far below 2^52"
)]
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Count blank values per column. Rows shorter than `columns` count their missing cells as blank.
pub fn blank_report(columns: &[String], rows: &[Row]) -> BlankReport {
    let total_rows = rows.len();

    let column_stats: Vec<ColumnBlanks> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let blank_count = rows.iter().filter(|row| is_blank(row.get(i))).count();
            ColumnBlanks {
                column: column.clone(),
                blank_count,
                blank_percentage: percentage(blank_count, total_rows),
            }
        })
        .collect();

    let mut most_missing: Option<&ColumnBlanks> = None;
    for stats in &column_stats {
        let more = match most_missing {
            None => true,
            Some(best) => stats.blank_count > best.blank_count,
        };
        if more {
            most_missing = Some(stats);
        }
    }
    let most_missing = most_missing.cloned();

    let negative_durations = columns
        .iter()
        .position(|c| c == DURATION_COLUMN)
        .map_or(0, |i| {
            rows.iter()
                .filter_map(|row| row.get(i)?.as_deref()?.trim().parse::<f64>().ok())
                .filter(|d| *d < 0.0)
                .count()
        });

    BlankReport {
        total_rows,
        columns: column_stats,
        most_missing,
        negative_durations,
    }
}

impl BlankReport {
    /// Pretty-printed JSON, newline-terminated.
    pub fn to_json(&self) -> AppResult<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Audit every column of the store.
pub fn diagnose_store<S>(store: &S) -> AppResult<BlankReport>
where
    S: RecordStore + ?Sized,
{
    let columns = store.list_all_columns()?;
    let rows = store.list_all_rows()?;
    let report = blank_report(&columns, &rows);
    log::info!(
        "Audited {} rows across {} columns",
        report.total_rows,
        report.columns.len()
    );
    Ok(report)
}

impl fmt::Display for BlankReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Rows: {}", self.total_rows)?;
        writeln!(f)?;
        writeln!(f, "Blank Value Counts Per Column:")?;
        for stats in &self.columns {
            writeln!(
                f,
                "{}: {} blanks ({:.2}%)",
                stats.column, stats.blank_count, stats.blank_percentage
            )?;
        }
        if let Some(most) = &self.most_missing {
            writeln!(f)?;
            writeln!(
                f,
                "Column with the most missing values: {} ({} blanks)",
                most.column, most.blank_count
            )?;
        }
        if self.negative_durations > 0 {
            writeln!(f, "Rows with a negative duration: {}", self.negative_durations)?;
        }
        Ok(())
    }
}
