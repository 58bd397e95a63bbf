//! Unified service-layer error type for coop-server
//!
//! `AppError` bridges DB-layer errors (`sqlx::Error`) and the API surface.
//! Every variant maps to one HTTP status and is rendered as
//! `{"detail": "<message>"}`, so services can use `?` propagation without
//! per-handler `.map_err` boilerplate.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range input, duplicate unique field (400)
    #[error("{0}")]
    Validation(String),
    /// Missing or invalid credentials/token (401)
    #[error("{0}")]
    Unauthorized(String),
    /// Authenticated but lacking the required role (403)
    #[error("{0}")]
    Forbidden(String),
    /// Referenced or target entity absent (404)
    #[error("{0}")]
    NotFound(String),
    /// Database or infrastructure failure (500), details logged, not leaked
    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        AppError::Internal
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

/// Convenience alias for service and repository results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_is_preserved() {
        let err = AppError::not_found("Egg not found");
        assert_eq!(err.to_string(), "Egg not found");
    }

    #[test]
    fn internal_detail_is_opaque() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(err.to_string(), "Internal server error");
    }
}
