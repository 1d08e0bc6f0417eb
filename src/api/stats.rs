// src/api/stats.rs

use crate::db::with_connection;
use crate::error::{AppError, AppResult};
use crate::stats::summarize_day;
use crate::validation::{validate_query_date, validate_query_limit};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use super::{ActivitySummaryResponse, AppState, SummaryQuery};

/// GET /api/get_activity?date=YYYY-MM-DD&limit=N
pub async fn get_activity(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> AppResult<Json<ActivitySummaryResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::InvalidInput {
        field: "query",
        reason: rejection.body_text(),
    })?;

    let date = validate_query_date(query.date.as_deref())?;
    let limit = validate_query_limit(query.limit)?;

    let db = state.db.clone();
    let summary = tokio::task::spawn_blocking(move || {
        with_connection(&db, "load activity summary", |conn| {
            summarize_day(conn, date, limit)
        })
    })
    .await
    .map_err(|e| AppError::Internal(format!("Summary task failed: {e}")))??;

    Ok(Json(summary.into()))
}
