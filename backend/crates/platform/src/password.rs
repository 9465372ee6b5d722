//! Password Strength Policy and Hashing
//!
//! - Fixed strength rule set, checked in order, first violation wins
//! - bcrypt hashing with a fixed work factor and a random salt per hash
//! - Zeroization of clear text passwords on drop
//!
//! ## Examples
//! ```rust
//! use platform::password::{ClearTextPassword, PasswordHasher};
//!
//! let password = ClearTextPassword::new("SecurePass123!".to_string());
//! password.validate_strength().unwrap();
//!
//! let hasher = PasswordHasher::new(4);
//! let hashed = hasher.hash(&password).unwrap();
//! assert!(hashed.verify(&password));
//! ```

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in bytes (UTF-8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the "special character" rule
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?~`"#;

/// bcrypt work factor used in production
pub const DEFAULT_COST: u32 = 12;

// ============================================================================
// Error Types
// ============================================================================

/// Password strength violations, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("password must be at least 8 characters long")]
    TooShort,

    #[error("password must contain at least one uppercase letter")]
    NoUppercase,

    #[error("password must contain at least one lowercase letter")]
    NoLowercase,

    #[error("password must contain at least one digit")]
    NoDigit,

    #[error("password must contain at least one special character")]
    NoSpecial,
}

/// Hashing failure
///
/// Only raised on catastrophic internal errors (invalid cost, RNG failure).
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] bcrypt::BcryptError),
}

// ============================================================================
// Strength policy
// ============================================================================

/// Validate a password against the strength rules
///
/// Rules are checked in a fixed order and only the first violation is
/// returned. Length is the UTF-8 byte length. Pure and deterministic.
pub fn validate_strength(password: &str) -> Result<(), PasswordPolicyError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::NoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordPolicyError::NoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::NoDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PasswordPolicyError::NoSpecial);
    }
    Ok(())
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`, and `Debug` is redacted. Construction does not validate:
/// sign-in must accept any input and fail with invalid credentials rather
/// than a policy error.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub fn validate_strength(&self) -> Result<(), PasswordPolicyError> {
        validate_strength(&self.0)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt
    ///
    /// Two calls with the same password produce different hashes.
    /// CPU-bound: async callers should run it on a blocking thread.
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(password.as_str(), self.cost)?;
        Ok(HashedPassword { hash })
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format (`$2b$<cost>$<salt+hash>`)
///
/// Never logged: `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored hash
    ///
    /// No format check here; a malformed hash simply never verifies.
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// String for database storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Returns `false` on mismatch and on a malformed hash; never errors.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_str(), &self.hash).unwrap_or(false)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    fn clear(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string())
    }

    #[test]
    fn test_policy_first_violation_wins() {
        assert_eq!(validate_strength("ab"), Err(PasswordPolicyError::TooShort));
        assert_eq!(validate_strength("abcdefgh"), Err(PasswordPolicyError::NoUppercase));
        assert_eq!(validate_strength("ABCDEFGH"), Err(PasswordPolicyError::NoLowercase));
        assert_eq!(validate_strength("Abcdefgh"), Err(PasswordPolicyError::NoDigit));
        assert_eq!(validate_strength("Abcdefg1"), Err(PasswordPolicyError::NoSpecial));
        assert_eq!(validate_strength("SecurePass123!"), Ok(()));
    }

    #[test]
    fn test_policy_short_password_reports_length_only() {
        // Fails every rule, only the first is reported
        assert_eq!(validate_strength(""), Err(PasswordPolicyError::TooShort));
        assert_eq!(validate_strength("1234567"), Err(PasswordPolicyError::TooShort));
    }

    #[test]
    fn test_policy_length_boundary() {
        assert_eq!(validate_strength("Abcde1!"), Err(PasswordPolicyError::TooShort));
        assert_eq!(validate_strength("Abcdef1!"), Ok(()));
    }

    #[test]
    fn test_policy_length_counts_utf8_bytes() {
        // 7 characters, 10 bytes
        assert_eq!(validate_strength("Ab1!ÄÖÜ"), Ok(()));
        // 7 bytes
        assert_eq!(validate_strength("Ab1!xyz"), Err(PasswordPolicyError::TooShort));
    }

    #[test]
    fn test_policy_every_special_character_counts() {
        for special in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdef1{special}");
            assert_eq!(validate_strength(&password), Ok(()), "special {special:?}");
        }
    }

    #[test]
    fn test_policy_space_is_not_special() {
        assert_eq!(validate_strength("Abcdef1 "), Err(PasswordPolicyError::NoSpecial));
    }

    #[test]
    fn test_policy_non_ascii_letters_do_not_count_as_case() {
        assert_eq!(validate_strength("ÄÖÜabcd1!"), Err(PasswordPolicyError::NoUppercase));
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(TEST_COST);
        let password = clear("SecurePass123!");
        let hashed = hasher.hash(&password).unwrap();

        assert!(hashed.verify(&password));
        assert!(!hashed.verify(&clear("SecurePass123?")));
        assert!(!hashed.verify(&clear("")));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(TEST_COST);
        let password = clear("SecurePass123!");
        let first = hasher.hash(&password).unwrap();
        let second = hasher.hash(&password).unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify(&password));
        assert!(second.verify(&password));
    }

    #[test]
    fn test_default_cost_is_twelve() {
        let hasher = PasswordHasher::default();
        assert_eq!(hasher.cost(), 12);

        let hashed = hasher.hash(&clear("SecurePass123!")).unwrap();
        assert!(hashed.as_str().starts_with("$2b$12$"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = clear("SecurePass123!");
        assert!(!HashedPassword::from_stored("").verify(&password));
        assert!(!HashedPassword::from_stored("not-a-bcrypt-hash").verify(&password));
        assert!(!HashedPassword::from_stored("$2b$12$short").verify(&password));
    }

    #[test]
    fn test_stored_hash_roundtrip() {
        let hasher = PasswordHasher::new(TEST_COST);
        let password = clear("SecurePass123!");
        let stored = hasher.hash(&password).unwrap().as_str().to_string();

        assert!(HashedPassword::from_stored(stored).verify(&password));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let hasher = PasswordHasher::new(99);
        assert!(hasher.hash(&clear("SecurePass123!")).is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = clear("SecretPassword123!");
        let debug = format!("{:?}", password);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = PasswordHasher::new(TEST_COST).hash(&password).unwrap();
        assert!(!format!("{:?}", hashed).contains("$2b$"));
        assert_eq!(hashed.to_string(), "[HASHED_PASSWORD]");
    }
}
