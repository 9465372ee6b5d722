//! Router Composition
//!
//! Public `/health` and `/auth/*`, gated `/users/*` and `/admin/*`.

use std::sync::Arc;

use auth::{AuthConfig, AuthGate, TokenService, UserRepository, auth_router};
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use users::{admin_router, domain::UserDirectory, users_router};

static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the full application router
///
/// `accounts` backs signup/login; `directory` backs the users and admin APIs.
pub fn build_router<A, D>(
    accounts: A,
    directory: D,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
) -> Router
where
    A: UserRepository + Send + Sync + 'static,
    D: UserDirectory + Send + Sync + 'static,
{
    let gate = AuthGate::new(tokens.clone());
    let directory = Arc::new(directory);

    Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_router(accounts, tokens, config))
        .nest("/users", users_router(directory.clone(), gate.clone()))
        .nest("/admin", admin_router(directory, gate))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    let request_id = req
                        .headers()
                        .get(&REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or_default();
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id = %request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
