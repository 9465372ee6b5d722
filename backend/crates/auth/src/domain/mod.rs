//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    auth::Auth,
    principal::Principal,
    user::{NewUser, User},
};
pub use repository::UserRepository;
