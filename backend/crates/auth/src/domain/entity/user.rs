//! User Entity
//!
//! Profile data of a user. Credentials live in the [`Auth`] entity.
//!
//! [`Auth`]: super::auth::Auth

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    date_of_birth::DateOfBirth, email::Email, user_id::UserId, user_name::UserName,
    user_role::UserRole,
};

/// Persisted user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,
    pub name: UserName,
    /// Unique, normalized to lowercase
    pub email: Email,
    pub role: UserRole,
    pub dob: DateOfBirth,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Age in full years as of today
    pub fn age(&self) -> u32 {
        self.dob.age()
    }
}

/// User about to be created; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub role: UserRole,
    pub dob: DateOfBirth,
}
