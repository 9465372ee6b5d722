//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Single message for every rejected bearer credential
pub const UNAUTHENTICATED_MESSAGE: &str = "Invalid or missing authentication token";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request body or path that could not be parsed
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    /// Malformed input (email, name, date of birth)
    #[error("{0}")]
    Validation(String),

    /// Password rejected by the strength policy
    #[error("{0}")]
    WeakPassword(#[from] PasswordPolicyError),

    /// Signup with an email that is already registered
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No usable bearer credential on a protected request
    #[error("Invalid or missing authentication token")]
    Unauthenticated,

    /// Authenticated, but the role is not allowed on this route
    #[error("Forbidden: insufficient permissions")]
    InsufficientRole,

    /// Token issuance or verification failure
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidInput(_) | AuthError::Validation(_) | AuthError::WeakPassword(_) => {
                ErrorKind::BadRequest
            }
            AuthError::EmailAlreadyExists => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::InsufficientRole => ErrorKind::Forbidden,
            AuthError::Token(TokenError::NotConfigured) => ErrorKind::InternalServerError,
            AuthError::Token(_) => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code carried in the error body
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidInput(_) => "INVALID_INPUT",
            AuthError::Validation(_) => "VALIDATION_FAILED",
            AuthError::WeakPassword(_) => "WEAK_PASSWORD",
            AuthError::EmailAlreadyExists => "ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::InsufficientRole => "INSUFFICIENT_PERMISSIONS",
            AuthError::Unauthenticated => "UNAUTHORIZED",
            AuthError::Token(TokenError::NotConfigured) => "INTERNAL_ERROR",
            AuthError::Token(_) => "UNAUTHORIZED",
            AuthError::Database(_) | AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to AppError
    ///
    /// Token failures collapse into the same body as a missing header.
    pub fn to_app_error(&self) -> AppError {
        let message = match self {
            AuthError::Token(TokenError::NotConfigured) => self.to_string(),
            AuthError::Token(_) => UNAUTHENTICATED_MESSAGE.to_string(),
            _ => self.to_string(),
        };
        AppError::new(self.kind(), message).with_code(self.code())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Token(TokenError::NotConfigured) => {
                tracing::error!("Token signing secret is not configured");
            }
            AuthError::Token(e) => {
                tracing::warn!(reason = %e, "Rejected bearer token");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InsufficientRole => {
                tracing::warn!("Request denied by role gate");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidInput(rejection.body_text())
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Blocking task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidInput("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::WeakPassword(PasswordPolicyError::NoDigit).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailAlreadyExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InsufficientRole.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_role_denial_code() {
        let app = AuthError::InsufficientRole.to_app_error();
        assert_eq!(app.status_code(), 403);
        assert_eq!(app.code(), "INSUFFICIENT_PERMISSIONS");
    }

    #[test]
    fn test_token_errors_collapse_to_one_response() {
        let variants = [
            TokenError::Malformed,
            TokenError::BadSignature,
            TokenError::UnexpectedAlgorithm,
            TokenError::Expired,
        ];
        let unauthenticated = AuthError::Unauthenticated.to_app_error();

        for variant in variants {
            let app = AuthError::Token(variant).to_app_error();
            assert_eq!(app.status_code(), 401);
            assert_eq!(app.code(), unauthenticated.code());
            assert_eq!(app.public_message(), unauthenticated.public_message());
        }
    }

    #[test]
    fn test_unconfigured_secret_is_a_server_error() {
        let app = AuthError::Token(TokenError::NotConfigured).to_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_weak_password_message_names_the_rule() {
        let app = AuthError::WeakPassword(PasswordPolicyError::NoUppercase).to_app_error();
        assert_eq!(app.code(), "WEAK_PASSWORD");
        assert!(app.public_message().contains("uppercase"));
    }

    #[test]
    fn test_internal_detail_is_redacted() {
        let app = AuthError::Internal("pool exhausted".into()).to_app_error();
        assert!(!app.public_message().contains("pool"));
    }
}
