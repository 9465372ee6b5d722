//! Auth Orchestrator
//!
//! The service seam the HTTP layer depends on. Handlers are generic over
//! [`AuthService`], so they can be driven by a test double.

use std::sync::Arc;

use platform::password::PasswordHasher;

use crate::application::sign_in::{SignInInput, SignInOutput, SignInUseCase};
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

#[trait_variant::make(AuthService: Send)]
pub trait LocalAuthService {
    /// Validate, hash and store a new account
    async fn sign_up(&self, input: SignUpInput) -> AuthResult<User>;

    /// Check credentials and issue a bearer token
    async fn sign_in(&self, input: SignInInput) -> AuthResult<SignInOutput>;
}

/// Production orchestrator over a [`UserRepository`]
pub struct DefaultAuthService<R>
where
    R: UserRepository,
{
    sign_up: SignUpUseCase<R>,
    sign_in: SignInUseCase<R>,
}

impl<R> DefaultAuthService<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, hasher: PasswordHasher) -> Self {
        Self {
            sign_up: SignUpUseCase::new(repo.clone(), hasher),
            sign_in: SignInUseCase::new(repo, tokens, hasher),
        }
    }
}

impl<R> AuthService for DefaultAuthService<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    async fn sign_up(&self, input: SignUpInput) -> AuthResult<User> {
        self.sign_up.execute(input).await
    }

    async fn sign_in(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        self.sign_in.execute(input).await
    }
}
