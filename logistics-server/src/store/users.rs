//! User persistence.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::User;

use super::StoreError;

/// What login needs to check a password.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub user_id: i64,
    pub password_hash: String,
    pub is_active: bool,
}

impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("user_id", &self.user_id)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

/// Storage operations on users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user with an already-hashed password.
    ///
    /// Fails with [`StoreError::UniqueViolation`] if the username or email
    /// is taken.
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError>;

    async fn username_exists(&self, username: &str) -> Result<bool, StoreError>;

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, StoreError>;
}

/// SQLite implementation of [`UserRepository`].
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            is_active: row.is_active,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    id: i64,
    password: String,
    is_active: bool,
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, password, is_active)
            VALUES (?, ?, ?, 1)
            RETURNING id, username, email, is_active
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, StoreError> {
        let row: Option<CredentialsRow> =
            sqlx::query_as("SELECT id, password, is_active FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|r| StoredCredentials {
            user_id: r.id,
            password_hash: r.password,
            is_active: r.is_active,
        }))
    }
}
