//! Shared Kernel
//!
//! Vocabulary shared by every bounded context of the user-management API:
//! - [`error::app_error::AppError`] - the one error type the HTTP boundary renders
//! - [`error::kind::ErrorKind`] - error classification mapped to status codes
//! - problem-JSON rendering of `AppError` (feature `axum`)
//!
//! Keep this crate small. Anything specific to auth or users belongs in
//! the owning crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
