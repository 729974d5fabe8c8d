//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use sitenav_core::error::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Forbidden(msg) => {
                tracing::warn!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, "Forbidden", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "Conflict", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseError", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MenuNotFound(_)
            | DomainError::MenuContentNotFound(_)
            | DomainError::MenuHasNoContent(_)
            | DomainError::MenuItemNotFound(_)
            | DomainError::ContentNotFound(_)
            | DomainError::PluginNotFound(_) => ApiError::NotFound(err.to_string()),
            DomainError::IdentifierAlreadyExists { .. } => ApiError::Conflict(err.to_string()),
            DomainError::ItemOutsideContent { .. }
            | DomainError::MoveIntoOwnSubtree(_)
            | DomainError::RootItemImmovable(_)
            | DomainError::TemplateNotAllowed(_)
            | DomainError::ValidationError(_) => ApiError::BadRequest(err.to_string()),
            DomainError::CorruptTree(_) | DomainError::DatabaseError(_) => {
                ApiError::DatabaseError(err.to_string())
            }
        }
    }
}
