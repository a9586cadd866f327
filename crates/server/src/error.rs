//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Every error maps to a fixed status code and a
//! human-readable `{"detail": "..."}` body; failures are terminal, nothing
//! is retried.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::product::ProductValidationError;
use crate::services::{AuthError, TokenError};

/// Application-level error type for the inventory API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Registration or login failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Bearer token was rejected.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// A product payload failed validation.
    #[error("{0}")]
    Validation(#[from] ProductValidationError),

    /// A category with this name already exists.
    #[error("Category already exists")]
    DuplicateCategory,

    /// A product with this SKU already exists.
    #[error("SKU already exists")]
    DuplicateSku,

    /// No product has the requested ID.
    #[error("Product not found")]
    ProductNotFound,

    /// Request is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body, matching the `{"detail": ...}` convention of the API.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl AppError {
    /// Whether this error is a server-side fault worth reporting.
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Internal(_)
                | Self::Auth(AuthError::PasswordHash | AuthError::Repository(_))
                | Self::Token(TokenError::Issue)
        )
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidEmail(_) | AuthError::WeakPassword(_) | AuthError::EmailTaken => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::PasswordHash | AuthError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Token(err) => match err {
                TokenError::Expired | TokenError::Invalid => StatusCode::UNAUTHORIZED,
                TokenError::Issue => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Validation(_) | Self::DuplicateCategory | Self::DuplicateSku => {
                StatusCode::BAD_REQUEST
            }
            Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// Client-facing message. Internal details are never exposed.
    fn detail(&self) -> String {
        match self {
            Self::Database(_)
            | Self::Internal(_)
            | Self::Auth(AuthError::PasswordHash | AuthError::Repository(_))
            | Self::Token(TokenError::Issue) => "Internal server error".to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Token(err) => err.to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = ErrorBody {
            detail: self.detail(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::DuplicateCategory.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::DuplicateSku.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::ProductNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Unauthorized("no token".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Auth(AuthError::EmailTaken).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Auth(AuthError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Token(TokenError::Expired).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Token(TokenError::Invalid).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Internal("connection string leaked".to_string());
        assert_eq!(err.detail(), "Internal server error");

        let err = AppError::Database(RepositoryError::NotFound);
        assert_eq!(err.detail(), "Internal server error");
    }

    #[test]
    fn test_client_errors_keep_their_messages() {
        assert_eq!(AppError::ProductNotFound.detail(), "Product not found");
        assert_eq!(
            AppError::Token(TokenError::Expired).detail(),
            "Token has expired"
        );
        assert_eq!(
            AppError::Auth(AuthError::InvalidCredentials).detail(),
            "Invalid email or password"
        );
    }
}
