//! Per-day activity statistics: top activities, busiest hour, peak activity and long sessions.

use crate::constants::LONG_SESSION_SECS;
use crate::db::{RecordStore, WindowRow};
use crate::error::AppResult;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::collections::{BTreeMap, BTreeSet};

/// StartTime layouts whose hour can be read; fractional seconds are optional.
const START_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Inclusive text bounds covering one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub start: String,
    pub end: String,
}

impl DayWindow {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            start: format!("{date} 00:00:00"),
            end: format!("{date} 23:59:59"),
        }
    }
}

/// Total seconds spent on one window title.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTotal {
    pub window_title: Option<String>,
    pub total_time: f64,
}

/// The (hour, title) pair with the most accumulated time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakActivity {
    pub hour: u32,
    pub window_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub top_activities: Vec<ActivityTotal>,
    pub total_tasks: usize,
    pub most_active_hour: Option<u32>,
    pub peak: Option<PeakActivity>,
    pub long_sessions: Vec<ActivityTotal>,
    /// Rows skipped from every total because their duration was missing or negative.
    pub defective_rows: usize,
}

/// Render an hour of the day as a range, e.g. 13 → "1 PM - 2 PM".
///
/// Morning ranges keep the AM suffix on both ends (11 → "11 AM - 12 AM"); only the last
/// hour rolls over to midnight.
pub fn format_hour(hour: u32) -> String {
    match hour % 24 {
        0 => "12 AM - 1 AM".to_string(),
        h @ 1..=11 => format!("{h} AM - {} AM", h + 1),
        12 => "12 PM - 1 PM".to_string(),
        23 => "11 PM - 12 AM".to_string(),
        h => format!("{} PM - {} PM", h - 12, h - 11),
    }
}

fn start_hour(start_time: &str) -> Option<u32> {
    let start_time = start_time.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(start_time, format).ok())
        .map(|t| t.hour())
}

fn valid_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d >= 0.0)
}

/// Keep the first strictly-largest entry; maps iterate in key order, so ties go to the smallest key.
fn max_by_total<K: Clone>(totals: &BTreeMap<K, f64>) -> Option<K> {
    let mut best: Option<(&K, f64)> = None;
    for (key, total) in totals {
        let better = match best {
            None => true,
            Some((_, best_total)) => *total > best_total,
        };
        if better {
            best = Some((key, *total));
        }
    }
    best.map(|(key, _)| key.clone())
}

/// Aggregate the rows of one window.
///
/// Titles with equal totals are ordered by title. Rows with missing or negative durations
/// still count toward `total_tasks` but are left out of every sum.
pub fn summarize(rows: &[WindowRow], limit: usize) -> ActivitySummary {
    let total_tasks = rows
        .iter()
        .filter_map(|row| row.window_title.as_deref())
        .collect::<BTreeSet<_>>()
        .len();

    let mut title_totals: BTreeMap<Option<&str>, f64> = BTreeMap::new();
    let mut hour_totals: BTreeMap<u32, f64> = BTreeMap::new();
    let mut pair_totals: BTreeMap<(u32, Option<&str>), f64> = BTreeMap::new();
    let mut defective_rows = 0;

    for row in rows {
        let Some(duration) = valid_duration(row.duration_secs) else {
            defective_rows += 1;
            continue;
        };
        let title = row.window_title.as_deref();

        *title_totals.entry(title).or_default() += duration;

        if let Some(hour) = row.start_time.as_deref().and_then(start_hour) {
            *hour_totals.entry(hour).or_default() += duration;
            *pair_totals.entry((hour, title)).or_default() += duration;
        }
    }

    let mut ranked: Vec<ActivityTotal> = title_totals
        .into_iter()
        .map(|(title, total)| ActivityTotal {
            window_title: title.map(str::to_string),
            total_time: total,
        })
        .collect();
    // stable sort keeps title order among equal totals
    ranked.sort_by(|a, b| b.total_time.total_cmp(&a.total_time));

    let long_sessions = ranked
        .iter()
        .filter(|activity| activity.total_time > LONG_SESSION_SECS)
        .cloned()
        .collect();
    ranked.truncate(limit);

    let peak = max_by_total(&pair_totals).map(|(hour, title)| PeakActivity {
        hour,
        window_title: title.map(str::to_string),
    });

    ActivitySummary {
        top_activities: ranked,
        total_tasks,
        most_active_hour: max_by_total(&hour_totals),
        peak,
        long_sessions,
        defective_rows,
    }
}

/// Summarize every activity that started on `date`.
pub fn summarize_day<S>(store: &S, date: NaiveDate, limit: u32) -> AppResult<ActivitySummary>
where
    S: RecordStore + ?Sized,
{
    let window = DayWindow::for_date(date);
    let rows = store.select_rows_in_window(&window.start, &window.end)?;
    let summary = summarize(&rows, usize::try_from(limit).unwrap_or(usize::MAX));

    if summary.defective_rows > 0 {
        log::warn!(
            "{} of {} activities on {date} have a missing or negative duration",
            summary.defective_rows,
            rows.len()
        );
    }
    log::debug!(
        "Summarized {} activities on {date} ({} distinct)",
        rows.len(),
        summary.total_tasks
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_activity, setup_test_db};

    fn total(title: &str, total_time: f64) -> ActivityTotal {
        ActivityTotal {
            window_title: Some(title.to_string()),
            total_time,
        }
    }

    #[test]
    fn test_format_hour_boundaries() {
        assert_eq!(format_hour(0), "12 AM - 1 AM");
        assert_eq!(format_hour(1), "1 AM - 2 AM");
        assert_eq!(format_hour(9), "9 AM - 10 AM");
        assert_eq!(format_hour(10), "10 AM - 11 AM");
        assert_eq!(format_hour(11), "11 AM - 12 AM");
        assert_eq!(format_hour(12), "12 PM - 1 PM");
        assert_eq!(format_hour(13), "1 PM - 2 PM");
        assert_eq!(format_hour(22), "10 PM - 11 PM");
        assert_eq!(format_hour(23), "11 PM - 12 AM");
        assert_eq!(format_hour(24), "12 AM - 1 AM");
    }

    #[test]
    fn test_day_window_bounds() {
        let window = DayWindow::for_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(window.start, "2024-03-01 00:00:00");
        assert_eq!(window.end, "2024-03-01 23:59:59");
    }

    #[test]
    fn test_start_hour_parsing() {
        assert_eq!(start_hour("2024-03-01 09:15:00"), Some(9));
        assert_eq!(start_hour("2024-03-01 23:59:59.250"), Some(23));
        assert_eq!(start_hour("2024-03-01 07:05"), Some(7));
        assert_eq!(start_hour("2024-03-01"), None);
        assert_eq!(start_hour("garbage"), None);
    }

    #[test]
    fn test_summarize_single_activity_example() {
        let rows = vec![
            WindowRow::new("chrome.exe", "2024-03-01 09:15:00", 1000.0),
            WindowRow::new("chrome.exe", "2024-03-01 09:45:00", 3000.0),
        ];

        let summary = summarize(&rows, 10);

        assert_eq!(summary.top_activities, vec![total("chrome.exe", 4000.0)]);
        assert_eq!(summary.total_tasks, 1);
        assert_eq!(summary.most_active_hour, Some(9));
        assert_eq!(
            summary.peak,
            Some(PeakActivity {
                hour: 9,
                window_title: Some("chrome.exe".into())
            })
        );
        assert_eq!(summary.long_sessions, vec![total("chrome.exe", 4000.0)]);
        assert_eq!(summary.defective_rows, 0);
    }

    #[test]
    fn test_summarize_empty_window() {
        let summary = summarize(&[], 10);
        assert!(summary.top_activities.is_empty());
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.most_active_hour, None);
        assert_eq!(summary.peak, None);
        assert!(summary.long_sessions.is_empty());
    }

    #[test]
    fn test_top_activities_sorted_and_limited() {
        let rows = vec![
            WindowRow::new("a", "2024-03-01 08:00:00", 10.0),
            WindowRow::new("b", "2024-03-01 08:00:00", 30.0),
            WindowRow::new("c", "2024-03-01 08:00:00", 20.0),
            WindowRow::new("a", "2024-03-01 09:00:00", 15.0),
        ];

        let summary = summarize(&rows, 2);
        assert_eq!(summary.top_activities, vec![total("b", 30.0), total("a", 25.0)]);
        assert_eq!(summary.total_tasks, 3, "distinct count ignores the limit");
    }

    #[test]
    fn test_equal_totals_ordered_by_title() {
        let rows = vec![
            WindowRow::new("zeta", "2024-03-01 08:00:00", 5.0),
            WindowRow::new("alpha", "2024-03-01 08:00:00", 5.0),
        ];

        let summary = summarize(&rows, 10);
        assert_eq!(summary.top_activities, vec![total("alpha", 5.0), total("zeta", 5.0)]);
    }

    #[test]
    fn test_most_active_hour_sums_across_titles() {
        let rows = vec![
            WindowRow::new("big", "2024-03-01 14:00:00", 100.0),
            WindowRow::new("x", "2024-03-01 10:00:00", 60.0),
            WindowRow::new("y", "2024-03-01 10:30:00", 60.0),
        ];

        let summary = summarize(&rows, 10);
        // hour 10 wins on the hourly sum even though "big" is the largest single pair
        assert_eq!(summary.most_active_hour, Some(10));
        assert_eq!(
            summary.peak,
            Some(PeakActivity {
                hour: 14,
                window_title: Some("big".into())
            })
        );
    }

    #[test]
    fn test_hour_ties_pick_lowest_hour() {
        let rows = vec![
            WindowRow::new("late", "2024-03-01 20:00:00", 50.0),
            WindowRow::new("early", "2024-03-01 06:00:00", 50.0),
        ];

        let summary = summarize(&rows, 10);
        assert_eq!(summary.most_active_hour, Some(6));
        assert_eq!(summary.peak.map(|p| p.hour), Some(6));
    }

    #[test]
    fn test_peak_ties_within_hour_pick_first_title() {
        let rows = vec![
            WindowRow::new("mail", "2024-03-01 09:10:00", 40.0),
            WindowRow::new("chat", "2024-03-01 09:20:00", 40.0),
        ];

        let summary = summarize(&rows, 10);
        assert_eq!(
            summary.peak.and_then(|p| p.window_title),
            Some("chat".to_string())
        );
    }

    #[test]
    fn test_long_session_threshold_is_strict() {
        let rows = vec![
            WindowRow::new("exact", "2024-03-01 08:00:00", 3600.0),
            WindowRow::new("over", "2024-03-01 08:00:00", 3600.5),
            WindowRow::new("split", "2024-03-01 08:00:00", 2000.0),
            WindowRow::new("split", "2024-03-01 12:00:00", 2000.0),
        ];

        let summary = summarize(&rows, 1);
        assert_eq!(
            summary.long_sessions,
            vec![total("split", 4000.0), total("over", 3600.5)]
        );
        assert!(summary.long_sessions.iter().all(|s| s.total_time > LONG_SESSION_SECS));
        assert_eq!(summary.top_activities.len(), 1, "long sessions ignore the limit");
    }

    #[test]
    fn test_top_totals_match_true_sums() {
        let rows = vec![
            WindowRow::new("a", "2024-03-01 01:00:00", 1.5),
            WindowRow::new("b", "2024-03-01 02:00:00", 2.0),
            WindowRow::new("a", "2024-03-01 03:00:00", 4.0),
            WindowRow::new("c", "2024-03-01 04:00:00", 0.5),
        ];

        let summary = summarize(&rows, 100);
        for activity in &summary.top_activities {
            let expected: f64 = rows
                .iter()
                .filter(|r| r.window_title == activity.window_title)
                .filter_map(|r| r.duration_secs)
                .sum();
            assert_eq!(activity.total_time, expected);
        }
        assert_eq!(summary.top_activities.len(), 3);
    }

    #[test]
    fn test_defective_durations_are_excluded() {
        let rows = vec![
            WindowRow::new("ok", "2024-03-01 08:00:00", 10.0),
            WindowRow::new("negative", "2024-03-01 08:00:00", -50.0),
            WindowRow {
                window_title: Some("missing".into()),
                start_time: Some("2024-03-01 08:00:00".into()),
                duration_secs: None,
            },
        ];

        let summary = summarize(&rows, 10);
        assert_eq!(summary.top_activities, vec![total("ok", 10.0)]);
        assert_eq!(summary.total_tasks, 3);
        assert_eq!(summary.defective_rows, 2);
    }

    #[test]
    fn test_unparseable_start_time_skips_hour_buckets_only() {
        let rows = vec![WindowRow::new("odd", "2024-03-01 late", 10.0)];

        let summary = summarize(&rows, 10);
        assert_eq!(summary.top_activities, vec![total("odd", 10.0)]);
        assert_eq!(summary.most_active_hour, None);
        assert_eq!(summary.peak, None);
    }

    #[test]
    fn test_null_titles_grouped_but_not_counted() {
        let rows = vec![
            WindowRow {
                window_title: None,
                start_time: Some("2024-03-01 08:00:00".into()),
                duration_secs: Some(5.0),
            },
            WindowRow::new("named", "2024-03-01 08:00:00", 1.0),
        ];

        let summary = summarize(&rows, 10);
        assert_eq!(summary.total_tasks, 1);
        assert_eq!(summary.top_activities[0].window_title, None);
        assert_eq!(summary.top_activities[0].total_time, 5.0);
    }

    #[test]
    fn test_summarize_day_filters_by_date() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();
        insert_activity(conn, "chrome.exe", "chrome.exe", "2024-03-01 09:15:00", 1000.0);
        insert_activity(conn, "chrome.exe", "chrome.exe", "2024-03-01 09:45:00", 3000.0);
        insert_activity(conn, "slack.exe", "slack.exe", "2024-03-02 09:00:00", 9000.0);

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let summary = summarize_day(conn, date, 10).unwrap();

        assert_eq!(summary.top_activities, vec![total("chrome.exe", 4000.0)]);
        assert_eq!(summary.total_tasks, 1);
        assert_eq!(summary.most_active_hour.map(format_hour).as_deref(), Some("9 AM - 10 AM"));
    }
}
