//! Auth Middleware
//!
//! Gates for protected routes:
//! - [`require_auth`] resolves the bearer token into a [`Principal`]
//! - [`require_role`] admits only principals whose role is allowed
//!
//! Layer `require_role` inside `require_auth` so the principal exists
//! by the time the role is checked.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;
use platform::token::TokenError;
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::principal::Principal;
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthError;

/// Extract the token from an `Authorization` value of the form `Bearer <token>`
///
/// The scheme is case-insensitive. Anything other than exactly two
/// whitespace-separated parts yields `None`.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token)
}

// ============================================================================
// Auth Gate
// ============================================================================

/// State for [`require_auth`]
#[derive(Clone)]
pub struct AuthGate {
    pub tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer)
        .ok_or(AuthError::Unauthenticated)?;

    let claims = match gate.tokens.verify(token) {
        Ok(claims) => claims,
        Err(TokenError::NotConfigured) => {
            tracing::error!("Bearer token presented but no signing secret is configured");
            return Err(AuthError::Unauthenticated);
        }
        Err(reason) => {
            tracing::warn!(%reason, "Rejected bearer token");
            return Err(AuthError::Unauthenticated);
        }
    };

    req.extensions_mut().insert(claims.principal());

    Ok(next.run(req).await)
}

// ============================================================================
// Role Gate
// ============================================================================

/// State for [`require_role`]
#[derive(Clone)]
pub struct RoleGate {
    allowed: Arc<[UserRole]>,
}

impl RoleGate {
    pub fn new(allowed: impl IntoIterator<Item = UserRole>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn admin_only() -> Self {
        Self::new([UserRole::Admin])
    }

    pub fn allowed(&self) -> &[UserRole] {
        &self.allowed
    }
}

/// Middleware that requires the principal's role to be in the allow-list
///
/// Without a principal (no [`require_auth`] in front) the request is
/// treated as unauthenticated.
pub async fn require_role(
    State(gate): State<RoleGate>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let principal = req
        .extensions()
        .get::<Principal>()
        .copied()
        .ok_or(AuthError::Unauthenticated)?;

    if !principal.has_any_role(gate.allowed()) {
        tracing::warn!(
            user_id = %principal.user_id,
            role = %principal.role,
            "Role not permitted"
        );
        return Err(AuthError::InsufficientRole);
    }

    Ok(next.run(req).await)
}

// ============================================================================
// Extractor
// ============================================================================

/// The authenticated caller, as placed by [`require_auth`]
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Principal);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .copied()
            .map(CurrentUser)
            .ok_or(AuthError::Unauthenticated)
    }
}
