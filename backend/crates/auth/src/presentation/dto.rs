//! API DTOs (Data Transfer Objects)

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `YYYY-MM-DD`
    pub dob: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// RFC 3339, second precision
    pub created_at: String,
}

impl From<&User> for SignUpResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name.to_string(),
            email: user.email.to_string(),
            role: user.role,
            created_at: user.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Login response; the token is also set as an HttpOnly cookie
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserSummary,
}

/// Public identity of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name.to_string(),
            email: user.email.to_string(),
            role: user.role,
        }
    }
}
