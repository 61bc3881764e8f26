//! API error type and HTTP status mapping

use auth::AuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use registry::RegistryError;
use report::ReportError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Missing bearer token")]
    MissingToken,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Registry(RegistryError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Registry(RegistryError::Conflict(msg)) => {
                (StatusCode::CONFLICT, msg.clone())
            }
            ApiError::Registry(RegistryError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, msg.clone())
            }
            ApiError::Registry(RegistryError::Database(e)) => {
                // Storage details go to the operator log, not the client.
                error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Auth(AuthError::InvalidCredentials) => {
                (StatusCode::BAD_REQUEST, "Invalid password".to_string())
            }
            ApiError::Auth(AuthError::RoleMismatch) => {
                (StatusCode::FORBIDDEN, "Role mismatch".to_string())
            }
            ApiError::Auth(AuthError::TokenExpired) => {
                (StatusCode::UNAUTHORIZED, "Token expired".to_string())
            }
            ApiError::Auth(AuthError::InvalidToken(_)) => {
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ApiError::Auth(AuthError::Hash(e)) => {
                error!("Password hashing failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Report(e) => {
                error!("Report generation failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error generating report".to_string(),
                )
            }
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Missing bearer token".to_string(),
            ),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
