use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned")]
    LockPoisoned,

    #[error("{0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True for errors caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::InvalidInput { .. } => true,
            AppError::Database(_)
            | AppError::Io(_)
            | AppError::Json(_)
            | AppError::Config(_)
            | AppError::LockPoisoned
            | AppError::Internal(_) => false,
        }
    }
}

/// JSON body returned for failed API requests
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = if self.is_client_error() {
            log::warn!("Rejected request: {self}");
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details("Invalid request", self.to_string()),
            )
        } else {
            log::error!("Request failed: {self}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_details("Internal server error", self.to_string()),
            )
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let err = AppError::InvalidInput {
            field: "date",
            reason: "is required".into(),
        };
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid date: is required");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_maps_to_server_error() {
        let err = AppError::from(rusqlite::Error::InvalidQuery);
        assert!(!err.is_client_error());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_omits_missing_details() {
        let body = ErrorResponse {
            error: "Invalid request".into(),
            details: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Invalid request"}"#);
    }
}
