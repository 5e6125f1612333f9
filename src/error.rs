use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Token refresh failed: {0}")]
    Auth(String),

    #[error("Sheet read failed: {0}")]
    RemoteRead(String),

    #[error("Sheet write failed: {0}")]
    RemoteWrite(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("User already exists")]
    DuplicateUser,
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Auth(ref e) => {
                tracing::error!("Token refresh failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Token refresh failed")
            }
            AppError::RemoteRead(ref e) => {
                tracing::error!("Sheet read failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Spreadsheet request failed")
            }
            AppError::RemoteWrite(ref e) => {
                tracing::error!("Sheet write failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Spreadsheet request failed")
            }
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::DuplicateUser => (StatusCode::CONFLICT, "User already exists"),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
