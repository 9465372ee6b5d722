//! User Password Value Object
//!
//! Domain wrappers over `platform::password`.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//! use platform::password::PasswordHasher;
//!
//! let raw = RawPassword::new("MySecurePass123!".to_string());
//! raw.validate_strength().unwrap();
//!
//! let hashed = UserPassword::from_raw(&raw, &PasswordHasher::new(4)).unwrap();
//! assert!(hashed.verify(&raw));
//! ```

use platform::password::{ClearTextPassword, HashedPassword, PasswordHasher};
use std::fmt;

use crate::error::AuthResult;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped. Construction never fails so that
/// sign-in can treat any input as a credential to check.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    /// Check the strength policy; only the first violated rule is reported
    pub fn validate_strength(&self) -> AuthResult<()> {
        self.0.validate_strength()?;
        Ok(())
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// bcrypt hash of a user password, as stored in the database
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password
    ///
    /// CPU-bound; callers on the async runtime use `spawn_blocking`.
    pub fn from_raw(raw: &RawPassword, hasher: &PasswordHasher) -> AuthResult<Self> {
        Ok(Self(hasher.hash(&raw.0)?))
    }

    /// Wrap the hash column from the database
    pub fn from_db(hash: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(hash))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Verify a raw password; a corrupt stored hash never matches
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(&raw.0)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use platform::password::PasswordPolicyError;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_strength_errors_are_weak_password() {
        let raw = RawPassword::new("password".to_string());
        assert!(matches!(
            raw.validate_strength(),
            Err(AuthError::WeakPassword(PasswordPolicyError::NoUppercase))
        ));

        assert!(RawPassword::new("ValidPass123!".to_string()).validate_strength().is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("TestPassword123!".to_string());
        let hashed = UserPassword::from_raw(&raw, &hasher()).unwrap();

        assert!(hashed.verify(&raw));
        assert!(!hashed.verify(&RawPassword::new("WrongPassword123!".to_string())));
    }

    #[test]
    fn test_db_roundtrip() {
        let raw = RawPassword::new("TestPassword123!".to_string());
        let stored = UserPassword::from_raw(&raw, &hasher()).unwrap().as_str().to_string();

        assert!(UserPassword::from_db(stored).verify(&raw));
        assert!(!UserPassword::from_db("corrupt").verify(&raw));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!".to_string());
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::from_raw(&raw, &hasher()).unwrap();
        assert!(!format!("{:?}", hashed).contains("$2"));
    }

    #[test]
    fn test_unicode_password() {
        let raw = RawPassword::new("最も！！安全なパスワードAa1!".to_string());
        let hashed = UserPassword::from_raw(&raw, &hasher()).unwrap();
        assert!(hashed.verify(&raw));
    }
}
