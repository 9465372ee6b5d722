//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::entity::{
    auth::Auth,
    user::{NewUser, User},
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    date_of_birth::DateOfBirth, email::Email, user_id::UserId, user_name::UserName,
    user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Columns of [`UserRow`], in order
pub const USER_COLUMNS: &str = "id, name, email, role, dob, created_at, updated_at";

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<(User, Auth)>> {
        let row = sqlx::query_as::<_, UserWithAuthRow>(
            r#"
            SELECT
                id,
                name,
                email,
                role,
                dob,
                created_at,
                updated_at,
                password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user_and_auth()).transpose()
    }

    async fn create_with_credentials(
        &self,
        new_user: &NewUser,
        password_hash: &UserPassword,
    ) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (name, email, password_hash, role, dob)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(new_user.name.as_str())
        .bind(new_user.email.as_str())
        .bind(password_hash.as_str())
        .bind(new_user.role.code())
        .bind(new_user.dob.as_date())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        row.into_user()
    }
}

/// A unique violation on insert can only be the email constraint
fn insert_error(e: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AuthError::EmailAlreadyExists;
    }
    AuthError::Database(e)
}

// ============================================================================
// Row types
// ============================================================================

/// `users` row without credentials
#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub dob: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    pub fn into_user(self) -> AuthResult<User> {
        let role = UserRole::from_code(&self.role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role in database: {}", self.role)))?;

        Ok(User {
            id: UserId::new(self.id),
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            role,
            dob: DateOfBirth::from_db(self.dob),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct UserWithAuthRow {
    #[sqlx(flatten)]
    user: UserRow,
    password_hash: String,
}

impl UserWithAuthRow {
    fn into_user_and_auth(self) -> AuthResult<(User, Auth)> {
        let user = self.user.into_user()?;
        let auth = Auth::new(user.id, UserPassword::from_db(self.password_hash));
        Ok((user, auth))
    }
}
