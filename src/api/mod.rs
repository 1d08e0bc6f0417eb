//! HTTP surface: the activity summary query and a liveness route.

mod dtos;
mod stats;

pub use dtos::*;
pub use stats::get_activity;

use crate::db::Database;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }
}

/// GET /
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "User Activity API is running!".to_string(),
    })
}

/// Routes:
/// - GET / - liveness message
/// - GET /api/get_activity - per-day activity summary
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/api/get_activity", get(get_activity))
        .with_state(state)
        .layer(cors)
}
