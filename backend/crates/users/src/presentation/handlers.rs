//! HTTP Handlers

use auth::CurrentUser;
use auth::domain::value_object::user_id::UserId;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{UpdateUserInput, UserService};
use crate::domain::repository::UserDirectory;
use crate::error::UserResult;
use crate::presentation::dto::{
    AdminStatsResponse, AdminUsersResponse, ListUsersQuery, ListUsersResponse,
    UpdateUserRequest, UserResponse, user_responses,
};

pub struct UsersAppState<R>
where
    R: UserDirectory + Send + Sync + 'static,
{
    pub service: Arc<UserService<R>>,
}

impl<R> Clone for UsersAppState<R>
where
    R: UserDirectory + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// GET /users/me
pub async fn current_user<R>(
    State(state): State<UsersAppState<R>>,
    CurrentUser(principal): CurrentUser,
) -> UserResult<Json<UserResponse>>
where
    R: UserDirectory + Send + Sync + 'static,
{
    let user = state.service.get(principal.user_id).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> UserResult<Json<UserResponse>>
where
    R: UserDirectory + Send + Sync + 'static,
{
    let Path(id) = id?;
    let user = state.service.get(UserId::new(id)).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// GET /users
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> UserResult<Json<ListUsersResponse>>
where
    R: UserDirectory + Send + Sync + 'static,
{
    let Query(query) = query?;

    let response = match query.page_request() {
        Some(request) => {
            let page = state.service.list_page(request).await?;
            ListUsersResponse::Page {
                data: user_responses(&page.users),
                pagination: page.info,
            }
        }
        None => ListUsersResponse::All(user_responses(&state.service.list().await?)),
    };

    Ok(Json(response))
}

/// PUT /users/{id}
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> UserResult<Json<UserResponse>>
where
    R: UserDirectory + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(req) = payload?;

    let user = state
        .service
        .update(
            UserId::new(id),
            UpdateUserInput {
                name: req.name,
                dob: req.dob,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> UserResult<StatusCode>
where
    R: UserDirectory + Send + Sync + 'static,
{
    let Path(id) = id?;
    state.service.delete(UserId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Admin
// ============================================================================

/// GET /admin/users
pub async fn admin_users<R>(
    State(state): State<UsersAppState<R>>,
    CurrentUser(admin): CurrentUser,
) -> UserResult<Json<AdminUsersResponse>>
where
    R: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(admin_id = %admin.user_id, "Admin listing all users");

    let users = user_responses(&state.service.list().await?);
    Ok(Json(AdminUsersResponse {
        total: users.len(),
        users,
    }))
}

/// GET /admin/stats
pub async fn admin_stats<R>(
    State(state): State<UsersAppState<R>>,
    CurrentUser(admin): CurrentUser,
) -> UserResult<Json<AdminStatsResponse>>
where
    R: UserDirectory + Send + Sync + 'static,
{
    tracing::info!(admin_id = %admin.user_id, "Admin reading statistics");

    Ok(Json(AdminStatsResponse {
        total_users: state.service.count().await?,
        message: "Admin statistics",
    }))
}
