//! User Name Value Object
//!
//! Display name of a user. Not unique, not used for login.
//!
//! ## Invariants
//! - Surrounding whitespace is trimmed
//! - Length: 2..=100 characters (after trimming)
//! - No control characters

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 2;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl AsRef<str>) -> AuthResult<Self> {
        let name = name.as_ref().trim();
        let length = name.chars().count();

        if length < USER_NAME_MIN_LENGTH {
            return Err(AuthError::Validation(format!(
                "Name must be at least {USER_NAME_MIN_LENGTH} characters"
            )));
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Name must be at most {USER_NAME_MAX_LENGTH} characters"
            )));
        }
        if name.chars().any(char::is_control) {
            return Err(AuthError::Validation(
                "Name contains invalid characters".to_string(),
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
