//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password strength policy and bcrypt hashing
//! - Signed bearer tokens (HS256 JWT)
//! - Cookie management

pub mod cookie;
pub mod password;
pub mod token;
