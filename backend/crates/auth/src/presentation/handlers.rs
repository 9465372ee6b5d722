//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthService, SignInInput, SignUpInput};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, UserSummary,
};

/// Shared state for auth handlers
pub struct AuthAppState<S>
where
    S: AuthService + Send + Sync + 'static,
{
    pub service: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> Clone for AuthAppState<S>
where
    S: AuthService + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /auth/signup
pub async fn sign_up<S>(
    State(state): State<AuthAppState<S>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<SignUpResponse>)>
where
    S: AuthService + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let user = state
        .service
        .sign_up(SignUpInput {
            name: req.name,
            email: req.email,
            password: req.password,
            dob: req.dob,
            role: None,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SignUpResponse::from(&user))))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn sign_in<S>(
    State(state): State<AuthAppState<S>>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    S: AuthService + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let output = state
        .service
        .sign_in(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .token_cookie()
        .set_cookie_header(&output.token)
        .map_err(|e| AuthError::Internal(format!("Invalid token cookie: {e}")))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            message: "Login successful",
            user: UserSummary::from(&output.user),
            token: output.token,
        }),
    ))
}
