//! API DTOs (Data Transfer Objects)

use auth::domain::entity::user::User;
use auth::domain::value_object::user_role::UserRole;
use serde::{Deserialize, Serialize};

use crate::domain::pagination::{PageInfo, PageRequest};

/// User as returned by the users and admin APIs
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// `YYYY-MM-DD`
    pub dob: String,
    pub age: u32,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name.to_string(),
            email: user.email.to_string(),
            role: user.role,
            dob: user.dob.to_string(),
            age: user.age(),
        }
    }
}

pub fn user_responses(users: &[User]) -> Vec<UserResponse> {
    users.iter().map(UserResponse::from).collect()
}

/// `GET /users` query; numbers that fail to parse count as 0
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListUsersQuery {
    /// `None` unless `page` or `limit` is given
    pub fn page_request(&self) -> Option<PageRequest> {
        let page = self.page.as_deref().filter(|s| !s.is_empty());
        let limit = self.limit.as_deref().filter(|s| !s.is_empty());
        if page.is_none() && limit.is_none() {
            return None;
        }

        let parse = |value: Option<&str>| -> i64 {
            value.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
        };
        Some(PageRequest::new(parse(page), parse(limit)))
    }
}

/// `GET /users` body: a bare list, or a page when pagination was asked for
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ListUsersResponse {
    All(Vec<UserResponse>),
    Page {
        data: Vec<UserResponse>,
        pagination: PageInfo,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    /// `YYYY-MM-DD`
    pub dob: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminUsersResponse {
    pub total: usize,
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminStatsResponse {
    pub total_users: i64,
    pub message: &'static str,
}
