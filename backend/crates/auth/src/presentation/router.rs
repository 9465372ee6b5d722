//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::service::{AuthService, DefaultAuthService};
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation
///
/// Routes are relative; nest under `/auth`.
pub fn auth_router<R>(repo: R, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let service = DefaultAuthService::new(Arc::new(repo), tokens, config.password_hasher());
    auth_router_with_service(service, config)
}

/// Create the Auth router around an existing [`AuthService`]
pub fn auth_router_with_service<S>(service: S, config: Arc<AuthConfig>) -> Router
where
    S: AuthService + Send + Sync + 'static,
{
    let state = AuthAppState {
        service: Arc::new(service),
        config,
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<S>))
        .route("/login", post(handlers::sign_in::<S>))
        .with_state(state)
}
