//! Domain Layer
//!
//! The user entity itself is owned by the auth crate; this layer adds
//! the directory interface and pagination rules.

pub mod pagination;
pub mod repository;

pub use pagination::{PageInfo, PageRequest};
pub use repository::UserDirectory;
