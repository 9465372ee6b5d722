//! Repository Traits

use auth::domain::entity::user::User;
use auth::domain::value_object::{
    date_of_birth::DateOfBirth, user_id::UserId, user_name::UserName,
};

use crate::error::UserResult;

/// Read/update/delete access to stored users, ordered by id
///
/// Creation goes through signup, which owns credentials.
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    async fn list(&self) -> UserResult<Vec<User>>;

    async fn list_page(&self, limit: i64, offset: i64) -> UserResult<Vec<User>>;

    async fn count(&self) -> UserResult<i64>;

    /// `None` when no user has this id
    async fn update(
        &self,
        id: UserId,
        name: &UserName,
        dob: DateOfBirth,
    ) -> UserResult<Option<User>>;

    /// `false` when no user has this id
    async fn delete(&self, id: UserId) -> UserResult<bool>;
}
