//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    auth::Auth,
    user::{NewUser, User},
};
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::AuthResult;

/// User store as seen by signup and login
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find a user and their credentials by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<(User, Auth)>>;

    /// Insert a user together with their password hash
    ///
    /// Fails with `AuthError::EmailAlreadyExists` when the email is taken.
    async fn create_with_credentials(
        &self,
        new_user: &NewUser,
        password_hash: &UserPassword,
    ) -> AuthResult<User>;
}
