//! Sign In Use Case
//!
//! Authenticates a user by email and password and issues a bearer token.

use std::sync::Arc;

use platform::password::PasswordHasher;
use tokio::sync::OnceCell;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Checked when no account matches, so every failed login costs one bcrypt verify
const DUMMY_PASSWORD: &str = "Unused-Dummy-Password-0!";

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed bearer token
    pub token: String,
    /// Authenticated user (no credentials)
    pub user: User,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
    dummy_hash: OnceCell<UserPassword>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, hasher: PasswordHasher) -> Self {
        Self {
            repo,
            tokens,
            hasher,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Unknown email and wrong password fail with the same error and
    /// both pay for one bcrypt verification
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(input.email).ok();
        let password = RawPassword::new(input.password);

        let account = match &email {
            Some(email) => self.repo.find_by_email(email).await?,
            None => None,
        };

        let (user, hash) = match account {
            Some((user, auth)) => (Some(user), auth.password_hash),
            None => (None, self.dummy_hash().await?),
        };

        let password_valid =
            tokio::task::spawn_blocking(move || hash.verify(&password)).await?;

        let Some(user) = user else {
            tracing::debug!(email = ?email.as_ref().map(Email::as_str), "Sign in for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !password_valid {
            tracing::debug!(user_id = %user.id, "Sign in with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, user.role)?;

        tracing::info!(user_id = %user.id, email = %user.email, "User signed in");

        Ok(SignInOutput { token, user })
    }

    /// Hash of [`DUMMY_PASSWORD`] at the configured cost, computed once
    async fn dummy_hash(&self) -> AuthResult<UserPassword> {
        let hasher = self.hasher;
        self.dummy_hash
            .get_or_try_init(|| async move {
                tokio::task::spawn_blocking(move || {
                    UserPassword::from_raw(&RawPassword::new(DUMMY_PASSWORD.to_string()), &hasher)
                })
                .await?
            })
            .await
            .cloned()
    }
}
