//! Error conversions
//!
//! Axum rendering of [`AppError`] as problem JSON.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum rendering (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_server_error() {
            tracing::error!(error = ?self, "Request failed with server error");
        }

        // RFC 7807 Problem Details, extended with a machine-readable code
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "code": self.code(),
            "detail": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}
