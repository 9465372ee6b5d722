//! Entity Module

pub mod auth;
pub mod principal;
pub mod user;
