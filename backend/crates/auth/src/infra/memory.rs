//! In-Memory Repository
//!
//! `UserRepository` over a process-local list. Used by tests and local
//! tooling; enforces the same email uniqueness as the database. The
//! profile helpers let other in-memory stores share the same accounts.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::{
    auth::Auth,
    user::{NewUser, User},
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    date_of_birth::DateOfBirth, email::Email, user_id::UserId, user_name::UserName,
    user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Store {
    last_id: i32,
    rows: Vec<(User, Auth)>,
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds accounts; ids continue after the highest seeded id
    pub fn with_users(users: impl IntoIterator<Item = (User, UserPassword)>) -> Self {
        let mut rows: Vec<(User, Auth)> = users
            .into_iter()
            .map(|(user, hash)| {
                let auth = Auth::new(user.id, hash);
                (user, auth)
            })
            .collect();
        rows.sort_by_key(|(user, _)| user.id);
        let last_id = rows.last().map_or(0, |(user, _)| user.id.as_i32());
        Self {
            store: Arc::new(RwLock::new(Store { last_id, rows })),
        }
    }

    /// All users in id order
    pub async fn users(&self) -> Vec<User> {
        let store = self.store.read().await;
        store.rows.iter().map(|(user, _)| user.clone()).collect()
    }

    pub async fn find_by_id(&self, id: UserId) -> Option<User> {
        let store = self.store.read().await;
        store
            .rows
            .iter()
            .find(|(user, _)| user.id == id)
            .map(|(user, _)| user.clone())
    }

    pub async fn update_profile(
        &self,
        id: UserId,
        name: &UserName,
        dob: DateOfBirth,
    ) -> Option<User> {
        let mut store = self.store.write().await;
        store
            .rows
            .iter_mut()
            .find(|(user, _)| user.id == id)
            .map(|(user, _)| {
                user.name = name.clone();
                user.dob = dob;
                user.updated_at = Utc::now();
                user.clone()
            })
    }

    /// Drops the user together with its credentials
    pub async fn remove(&self, id: UserId) -> bool {
        let mut store = self.store.write().await;
        let before = store.rows.len();
        store.rows.retain(|(user, _)| user.id != id);
        store.rows.len() < before
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<(User, Auth)>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .iter()
            .find(|(user, _)| &user.email == email)
            .cloned())
    }

    async fn create_with_credentials(
        &self,
        new_user: &NewUser,
        password_hash: &UserPassword,
    ) -> AuthResult<User> {
        let mut store = self.store.write().await;

        if store.rows.iter().any(|(user, _)| user.email == new_user.email) {
            return Err(AuthError::EmailAlreadyExists);
        }

        store.last_id += 1;
        let now = Utc::now();
        let user = User {
            id: UserId::new(store.last_id),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            role: new_user.role,
            dob: new_user.dob,
            created_at: now,
            updated_at: now,
        };
        let auth = Auth::new(user.id, password_hash.clone());
        store.rows.push((user.clone(), auth));

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;
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
    async fn test_ids_continue_after_seeded_users() {
        let seeded = InMemoryUserRepository::new();
        let first = seeded
            .create_with_credentials(&new_user("a@example.com"), &UserPassword::from_db("x"))
            .await
            .unwrap();

        let repo = InMemoryUserRepository::with_users([(first, UserPassword::from_db("x"))]);
        let second = repo
            .create_with_credentials(&new_user("b@example.com"), &UserPassword::from_db("y"))
            .await
            .unwrap();

        assert_eq!(second.id, UserId::new(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_profile_edits_are_visible_to_sign_in_lookups() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create_with_credentials(&new_user("a@example.com"), &UserPassword::from_db("x"))
            .await
            .unwrap();

        let renamed = repo
            .update_profile(user.id, &UserName::from_db("Janet"), user.dob)
            .await
            .unwrap();
        assert_eq!(renamed.name.as_str(), "Janet");

        let (found, auth) = repo.find_by_email(&user.email).await.unwrap().unwrap();
        assert_eq!(found.name.as_str(), "Janet");
        assert_eq!(auth.password_hash.as_str(), "x");
    }

    #[tokio::test]
    async fn test_remove_drops_credentials() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create_with_credentials(&new_user("a@example.com"), &UserPassword::from_db("x"))
            .await
            .unwrap();

        assert!(repo.remove(user.id).await);
        assert!(!repo.remove(user.id).await);
        assert!(repo.find_by_email(&user.email).await.unwrap().is_none());
        assert!(repo.find_by_id(user.id).await.is_none());
        assert!(repo.is_empty().await);
    }
}
