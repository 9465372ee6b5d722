//! Signed Bearer Tokens
//!
//! HS256 JWT encoding and decoding with a single accepted algorithm.
//! Claims are caller-defined; they only need to expose their expiry.
//!
//! Expiry is checked against a caller-supplied clock, and a token whose
//! `exp` equals the current second is already expired.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The only algorithm tokens are signed and accepted with
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    BadSignature,

    #[error("token uses an unexpected signing algorithm")]
    UnexpectedAlgorithm,

    #[error("token has expired")]
    Expired,

    #[error("token signing secret is not configured")]
    NotConfigured,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => TokenError::BadSignature,
            JwtErrorKind::InvalidAlgorithm | JwtErrorKind::InvalidAlgorithmName => {
                TokenError::UnexpectedAlgorithm
            }
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}

/// Claims carrying an absolute expiry (seconds since the Unix epoch)
pub trait ExpiringClaims {
    fn expires_at(&self) -> i64;
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// HS256 token codec
///
/// Built once from the process-wide secret. Without a secret every
/// operation fails with [`TokenError::NotConfigured`].
pub struct JwtCodec {
    keys: Option<SigningKeys>,
    validation: Validation,
}

impl JwtCodec {
    /// Create a codec; an absent or empty secret leaves it unconfigured
    pub fn new(secret: Option<&[u8]>) -> Self {
        let keys = secret.filter(|s| !s.is_empty()).map(|s| SigningKeys {
            encoding: EncodingKey::from_secret(s),
            decoding: DecodingKey::from_secret(s),
        });

        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        // exp must be present; the comparison itself is done in `decode`
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self { keys, validation }
    }

    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        let keys = self.keys.as_ref().ok_or(TokenError::NotConfigured)?;
        let token = jsonwebtoken::encode(&Header::new(TOKEN_ALGORITHM), claims, &keys.encoding)?;
        Ok(token)
    }

    pub fn decode<C>(&self, token: &str, now: DateTime<Utc>) -> Result<C, TokenError>
    where
        C: DeserializeOwned + ExpiringClaims,
    {
        let keys = self.keys.as_ref().ok_or(TokenError::NotConfigured)?;
        let data = jsonwebtoken::decode::<C>(token, &keys.decoding, &self.validation)?;

        if data.claims.expires_at() <= now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("algorithm", &TOKEN_ALGORITHM)
            .field("configured", &self.is_configured())
            .finish()
    }
}
