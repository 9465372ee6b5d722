//! PostgreSQL Directory Implementation

use auth::domain::entity::user::User;
use auth::domain::value_object::{
    date_of_birth::DateOfBirth, user_id::UserId, user_name::UserName,
};
use auth::infra::postgres::{USER_COLUMNS, UserRow};
use sqlx::PgPool;

use crate::domain::repository::UserDirectory;
use crate::error::UserResult;

#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_users(rows: Vec<UserRow>) -> UserResult<Vec<User>> {
    rows.into_iter()
        .map(|row| row.into_user().map_err(Into::into))
        .collect()
}

impl UserDirectory for PgUserDirectory {
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user).transpose()?)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        into_users(rows)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> UserResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        into_users(rows)
    }

    async fn count(&self) -> UserResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn update(
        &self,
        id: UserId,
        name: &UserName,
        dob: DateOfBirth,
    ) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET name = $2, dob = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id.as_i32())
        .bind(name.as_str())
        .bind(dob.as_date())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user).transpose()?)
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
