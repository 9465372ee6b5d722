//! User Service
//!
//! Lookups, listing, profile updates and deletion over a [`UserDirectory`].

use std::sync::Arc;

use auth::domain::entity::user::User;
use auth::domain::value_object::{
    date_of_birth::DateOfBirth, user_id::UserId, user_name::UserName,
};

use crate::domain::pagination::{PageInfo, PageRequest};
use crate::domain::repository::UserDirectory;
use crate::error::{UserError, UserResult};

/// Profile fields a user may change
#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub name: String,
    /// `YYYY-MM-DD`
    pub dob: String,
}

/// One page of users plus its pagination block
#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<User>,
    pub info: PageInfo,
}

pub struct UserService<R>
where
    R: UserDirectory,
{
    repo: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserDirectory + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: UserId) -> UserResult<User> {
        self.repo.find_by_id(id).await?.ok_or(UserError::NotFound)
    }

    pub async fn list(&self) -> UserResult<Vec<User>> {
        self.repo.list().await
    }

    pub async fn list_page(&self, request: PageRequest) -> UserResult<UserPage> {
        let total = self.repo.count().await?;
        let users = self
            .repo
            .list_page(request.limit(), request.offset())
            .await?;

        Ok(UserPage {
            users,
            info: PageInfo::new(request, total),
        })
    }

    pub async fn count(&self) -> UserResult<i64> {
        self.repo.count().await
    }

    pub async fn update(&self, id: UserId, input: UpdateUserInput) -> UserResult<User> {
        let name = UserName::new(&input.name)?;
        let dob = DateOfBirth::parse(&input.dob)?;

        let user = self
            .repo
            .update(id, &name, dob)
            .await?
            .ok_or(UserError::NotFound)?;

        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    pub async fn delete(&self, id: UserId) -> UserResult<()> {
        if !self.repo.delete(id).await? {
            return Err(UserError::NotFound);
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
