//! In-Memory Directory
//!
//! `UserDirectory` over the auth crate's in-memory accounts, so users
//! created through signup are the same users listed, edited and deleted here.

use auth::InMemoryUserRepository;
use auth::domain::entity::user::User;
use auth::domain::value_object::{
    date_of_birth::DateOfBirth, user_id::UserId, user_name::UserName,
    user_password::UserPassword,
};

use crate::domain::repository::UserDirectory;
use crate::error::UserResult;

#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    accounts: InMemoryUserRepository,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds profiles without credentials; these users cannot sign in
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let accounts = InMemoryUserRepository::with_users(
            users
                .into_iter()
                .map(|user| (user, UserPassword::from_db(String::new()))),
        );
        Self { accounts }
    }

    /// The account store behind this directory, for wiring signup and login
    pub fn accounts(&self) -> &InMemoryUserRepository {
        &self.accounts
    }
}

impl From<InMemoryUserRepository> for InMemoryUserDirectory {
    fn from(accounts: InMemoryUserRepository) -> Self {
        Self { accounts }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        Ok(self.accounts.find_by_id(id).await)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.accounts.users().await)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> UserResult<Vec<User>> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);
        let users = self.accounts.users().await;
        Ok(users.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self) -> UserResult<i64> {
        Ok(i64::try_from(self.accounts.len().await).unwrap_or(i64::MAX))
    }

    async fn update(
        &self,
        id: UserId,
        name: &UserName,
        dob: DateOfBirth,
    ) -> UserResult<Option<User>> {
        Ok(self.accounts.update_profile(id, name, dob).await)
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        Ok(self.accounts.remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::domain::entity::user::NewUser;
    use auth::domain::repository::UserRepository;
    use auth::domain::value_object::{email::Email, user_role::UserRole};
    use chrono::NaiveDate;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: UserName::from_db("Jane"),
            email: Email::from_db(email),
            role: UserRole::User,
            dob: DateOfBirth::from_db(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_signed_up_accounts_are_listed() {
        let accounts = InMemoryUserRepository::new();
        let directory = InMemoryUserDirectory::from(accounts.clone());

        let created = accounts
            .create_with_credentials(&new_user("jane@example.com"), &UserPassword::from_db("x"))
            .await
            .unwrap();

        assert_eq!(directory.count().await.unwrap(), 1);
        let found = directory.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.email.as_str(), "jane@example.com");
    }

    #[tokio::test]
    async fn test_deleted_user_can_no_longer_be_found_for_login() {
        let accounts = InMemoryUserRepository::new();
        let directory = InMemoryUserDirectory::from(accounts.clone());
        let created = accounts
            .create_with_credentials(&new_user("jane@example.com"), &UserPassword::from_db("x"))
            .await
            .unwrap();

        assert!(directory.delete(created.id).await.unwrap());
        assert!(accounts.find_by_email(&created.email).await.unwrap().is_none());
    }
}
