//! Application Layer

pub mod service;

pub use service::{UpdateUserInput, UserPage, UserService};
