//! Users / Admin Routers
//!
//! Both routers carry their own gates; nest them under `/users` and
//! `/admin`.

use auth::{AuthGate, RoleGate, require_auth, require_role};
use axum::middleware::from_fn_with_state;
use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::UserService;
use crate::domain::repository::UserDirectory;
use crate::presentation::handlers::{self, UsersAppState};

fn state<R>(repo: Arc<R>) -> UsersAppState<R>
where
    R: UserDirectory + Send + Sync + 'static,
{
    UsersAppState {
        service: Arc::new(UserService::new(repo)),
    }
}

/// Users API, behind the Auth Gate
pub fn users_router<R>(repo: Arc<R>, gate: AuthGate) -> Router
where
    R: UserDirectory + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::list_users::<R>))
        .route("/me", get(handlers::current_user::<R>))
        .route(
            "/{id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .with_state(state(repo))
        .layer(from_fn_with_state(gate, require_auth))
}

/// Admin API, behind the Auth Gate and an admin-only Role Gate
pub fn admin_router<R>(repo: Arc<R>, gate: AuthGate) -> Router
where
    R: UserDirectory + Send + Sync + 'static,
{
    Router::new()
        .route("/users", get(handlers::admin_users::<R>))
        .route("/stats", get(handlers::admin_stats::<R>))
        .with_state(state(repo))
        .layer(from_fn_with_state(RoleGate::admin_only(), require_role))
        .layer(from_fn_with_state(gate, require_auth))
}
