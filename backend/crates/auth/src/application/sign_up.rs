//! Sign Up Use Case
//!
//! Creates a new user account with credentials.

use std::sync::Arc;

use platform::password::PasswordHasher;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    date_of_birth::DateOfBirth,
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::AuthResult;

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `YYYY-MM-DD`
    pub dob: String,
    /// Defaults to [`UserRole::User`]
    pub role: Option<UserRole>,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    hasher: PasswordHasher,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, hasher: PasswordHasher) -> Self {
        Self { repo, hasher }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let name = UserName::new(&input.name)?;
        let email = Email::new(input.email)?;
        let dob = DateOfBirth::parse(&input.dob)?;

        // Policy strictly before hashing: rejected passwords are never hashed
        let password = RawPassword::new(input.password);
        if let Err(e) = password.validate_strength() {
            tracing::warn!(email = %email, reason = %e, "Weak password rejected at signup");
            return Err(e);
        }

        let hasher = self.hasher;
        let password_hash =
            tokio::task::spawn_blocking(move || UserPassword::from_raw(&password, &hasher))
                .await??;

        let new_user = NewUser {
            name,
            email,
            role: input.role.unwrap_or_default(),
            dob,
        };

        let user = self
            .repo
            .create_with_credentials(&new_user, &password_hash)
            .await?;

        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            role = %user.role,
            "User signed up"
        );

        Ok(user)
    }
}
