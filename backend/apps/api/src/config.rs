//! Server Configuration
//!
//! Read once from the environment (after `.env` is loaded) and never
//! mutated afterwards.

use std::fmt;
use std::time::Duration;

use anyhow::Context;
use auth::{AuthConfig, TokenConfig};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JWT_EXPIRY_HOURS: u64 = 24;
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub log_level: String,
    pub jwt_secret: Option<String>,
    pub jwt_expiry: Duration,
    pub cookie_secure: bool,
    pub frontend_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match get("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SERVER_PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let expiry_hours = get("JWT_EXPIRY_HOURS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_JWT_EXPIRY_HOURS);

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            port,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            jwt_secret: get("JWT_SECRET"),
            jwt_expiry: Duration::from_secs(expiry_hours.saturating_mul(3600)),
            // Unset means secure; otherwise only the exact value "true" enables it
            cookie_secure: get("COOKIE_SECURE").is_none_or(|value| value == "true"),
            frontend_origins,
        })
    }

    /// Auth settings derived from this config
    ///
    /// Without `JWT_SECRET`, debug builds sign with a random per-process
    /// secret and release builds leave issuance unconfigured.
    pub fn auth_config(&self) -> AuthConfig {
        let token = match &self.jwt_secret {
            Some(secret) => TokenConfig {
                secret: Some(secret.as_bytes().to_vec()),
                ttl: self.jwt_expiry,
            },
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using a random development secret");
                TokenConfig {
                    ttl: self.jwt_expiry,
                    ..TokenConfig::with_random_secret()
                }
            }
            None => {
                tracing::warn!("JWT_SECRET not set, login will fail until it is configured");
                TokenConfig {
                    secret: None,
                    ttl: self.jwt_expiry,
                }
            }
        };

        AuthConfig {
            token,
            cookie_secure: self.cookie_secure,
            ..AuthConfig::default()
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &"[REDACTED]")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("jwt_expiry", &self.jwt_expiry)
            .field("cookie_secure", &self.cookie_secure)
            .field("frontend_origins", &self.frontend_origins)
            .finish()
    }
}
