//! Auth Entity
//!
//! Authentication credentials for a user.
//! Separated from the User entity to isolate sensitive data.

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Auth credentials entity
#[derive(Debug, Clone)]
pub struct Auth {
    /// Reference to User
    pub user_id: UserId,
    /// bcrypt hash, never serialized into a response
    pub password_hash: UserPassword,
}

impl Auth {
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        Self {
            user_id,
            password_hash,
        }
    }
}
