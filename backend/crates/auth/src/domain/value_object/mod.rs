//! Value Object Module

pub mod date_of_birth;
pub mod email;
pub mod user_id;
pub mod user_name;
pub mod user_password;
pub mod user_role;
