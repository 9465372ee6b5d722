//! Application Error - Unified error type for the application
//!
//! Defines the [`AppError`] struct rendered at the HTTP boundary.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Generic message shown to callers for every 5xx error
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Unified application error
///
/// Crate-level errors (`AuthError`, `UserError`) convert into this type at
/// the HTTP boundary. It is the only type that knows how to render an
/// error body.
///
/// ## Fields
/// * `kind` - classification, decides the status code
/// * `message` - caller-facing message
/// * `code` - machine-readable code, falls back to [`ErrorKind::default_code`]
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::Unauthorized, "Invalid email or password")
///     .with_code("INVALID_CREDENTIALS");
/// assert_eq!(err.status_code(), 401);
/// assert_eq!(err.code(), "INVALID_CREDENTIALS");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    code: Option<&'static str>,
}

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }

    /// Attach a specific machine-readable code
    #[inline]
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.code.unwrap_or_else(|| self.kind.default_code())
    }

    /// Message safe to send to the caller
    ///
    /// Server errors never expose their message; it may contain database
    /// or configuration details.
    #[inline]
    pub fn public_message(&self) -> &str {
        if self.kind.is_server_error() {
            INTERNAL_ERROR_MESSAGE
        } else {
            &self.message
        }
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("code", &self.code())
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {}
