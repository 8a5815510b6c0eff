//! SQLite implementation of the user credential repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// SQLite repository for the `users` table.
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT username, password, sectors, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        // A duplicate username violates the primary key and surfaces as
        // AppError::Conflict via map_sqlx_error.
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, sectors)
            VALUES (?, ?, ?)
            RETURNING username, password, sectors, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(new_user.sectors_column())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}
