//! Authenticated Principal
//!
//! Identity resolved from a verified bearer token. Lives in the request's
//! extensions for that request only.

use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub role: UserRole,
}

impl Principal {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Whether the role is in the allow-list
    pub fn has_any_role(&self, allowed: &[UserRole]) -> bool {
        allowed.contains(&self.role)
    }
}
