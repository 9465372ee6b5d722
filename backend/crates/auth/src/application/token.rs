//! Token Issuer / Verifier
//!
//! Mints and validates bearer tokens carrying a user's identity and role.

use chrono::{DateTime, Utc};
use platform::token::{ExpiringClaims, JwtCodec, TokenError};
use serde::{Deserialize, Serialize};

use crate::application::config::TokenConfig;
use crate::domain::entity::principal::Principal;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// Claims carried by every bearer token
///
/// Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub user_id: UserId,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl IdentityClaims {
    pub fn principal(&self) -> Principal {
        Principal::new(self.user_id, self.role)
    }
}

impl ExpiringClaims for IdentityClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// HS256 token service bound to one immutable [`TokenConfig`]
#[derive(Debug)]
pub struct TokenService {
    codec: JwtCodec,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            codec: JwtCodec::new(config.secret.as_deref()),
            ttl_secs: config.ttl_secs(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.codec.is_configured()
    }

    pub fn issue(&self, user_id: UserId, role: UserRole) -> Result<String, TokenError> {
        self.issue_at(user_id, role, Utc::now())
    }

    pub fn issue_at(
        &self,
        user_id: UserId,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = IdentityClaims {
            user_id,
            role,
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };
        self.codec.encode(&claims)
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<IdentityClaims, TokenError> {
        self.codec.decode(token, now)
    }
}
