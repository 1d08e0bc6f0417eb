// src/api/dtos.rs

use crate::constants::{NO_DATA, PLACEHOLDER};
use crate::stats::{format_hour, ActivitySummary, ActivityTotal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default, alias = "specific_date")]
    pub date: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct ActivityTotalResponse {
    pub window_title: Option<String>,
    pub total_time: f64,
}

impl From<ActivityTotal> for ActivityTotalResponse {
    fn from(total: ActivityTotal) -> Self {
        Self {
            window_title: total.window_title,
            total_time: total.total_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct ActivitySummaryResponse {
    pub activity: Vec<ActivityTotalResponse>,
    pub total_tasks: usize,
    pub most_active_hour: String,
    pub peak_hour: String,
    pub peak_activity: String,
    pub long_sessions: Vec<ActivityTotalResponse>,
}

impl From<ActivitySummary> for ActivitySummaryResponse {
    fn from(summary: ActivitySummary) -> Self {
        let most_active_hour = summary
            .most_active_hour
            .map_or_else(|| NO_DATA.to_string(), format_hour);

        let (peak_hour, peak_activity) = match summary.peak {
            Some(peak) => (
                format_hour(peak.hour),
                peak.window_title.unwrap_or_else(|| PLACEHOLDER.to_string()),
            ),
            None => (NO_DATA.to_string(), NO_DATA.to_string()),
        };

        Self {
            activity: summary.top_activities.into_iter().map(Into::into).collect(),
            total_tasks: summary.total_tasks,
            most_active_hour,
            peak_hour,
            peak_activity,
            long_sessions: summary.long_sessions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct HealthResponse {
    pub message: String,
}
