//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup
//! and shared read-only.

use std::fmt;
use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::password::{DEFAULT_COST, PasswordHasher};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Length of generated development secrets, in bytes
const RANDOM_SECRET_LEN: usize = 32;

/// Token signing configuration
///
/// Immutable once handed to a `TokenService`. A different TTL only
/// affects tokens issued afterwards.
#[derive(Clone)]
pub struct TokenConfig {
    /// HMAC secret; `None` leaves issuance unconfigured
    pub secret: Option<Vec<u8>>,
    /// Lifetime of newly issued tokens
    pub ttl: Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl: DEFAULT_TOKEN_TTL,
        }
    }
}

impl TokenConfig {
    /// Config with a freshly generated random secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; RANDOM_SECRET_LEN];
        rand::rng().fill_bytes(&mut secret);
        Self {
            secret: Some(secret),
            ..Default::default()
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret and lifetime
    pub token: TokenConfig,
    /// Login cookie name
    pub cookie_name: String,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: TokenConfig::default(),
            cookie_name: "token".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            bcrypt_cost: DEFAULT_COST,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret
    pub fn with_random_secret() -> Self {
        Self {
            token: TokenConfig::with_random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn password_hasher(&self) -> PasswordHasher {
        PasswordHasher::new(self.bcrypt_cost)
    }

    /// Login cookie; lives exactly as long as the token inside it
    pub fn token_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token.ttl_secs()),
        }
    }
}
