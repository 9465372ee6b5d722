//! Users Backend Module
//!
//! Profile reads, updates and deletion for authenticated callers, plus
//! the admin-only listing and statistics endpoints.
//!
//! Accounts are created by the auth crate's signup; this crate never
//! touches credentials.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


pub use error::{UserError, UserResult};
pub use infra::memory::InMemoryUserDirectory;
pub use infra::postgres::PgUserDirectory;
pub use presentation::router::{admin_router, users_router};
