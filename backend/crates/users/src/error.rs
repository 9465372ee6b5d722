//! User Error Types
//!
//! User-directory error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    /// Request body, path or query that could not be parsed
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    /// Value-object validation and anything raised by the auth gate
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::NotFound => ErrorKind::NotFound,
            UserError::InvalidInput(_) => ErrorKind::BadRequest,
            UserError::Auth(e) => e.kind(),
            UserError::Database(_) | UserError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UserError::NotFound => "NOT_FOUND",
            UserError::InvalidInput(_) => "INVALID_INPUT",
            UserError::Auth(e) => e.code(),
            UserError::Database(_) | UserError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            UserError::Auth(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()).with_code(self.code()),
        }
    }

    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "User internal error");
            }
            UserError::Auth(AuthError::Database(e)) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::Auth(AuthError::Internal(msg)) => {
                tracing::error!(message = %msg, "User internal error");
            }
            _ => {
                tracing::debug!(error = %self, "User error");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for UserError {
    fn from(rejection: JsonRejection) -> Self {
        UserError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for UserError {
    fn from(_: PathRejection) -> Self {
        UserError::InvalidInput("Invalid user ID".to_string())
    }
}

impl From<QueryRejection> for UserError {
    fn from(rejection: QueryRejection) -> Self {
        UserError::InvalidInput(rejection.body_text())
    }
}
