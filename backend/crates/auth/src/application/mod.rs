//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod service;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use config::{AuthConfig, TokenConfig};
pub use service::{AuthService, DefaultAuthService};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::{IdentityClaims, TokenService};
