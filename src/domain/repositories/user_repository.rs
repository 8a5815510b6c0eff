//! Repository trait for user credential storage.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Access to the `users` table, the only table this service writes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks up a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new user.
    ///
    /// The username primary key serializes concurrent registrations; a
    /// duplicate surfaces as [`AppError::Conflict`], which the service layer
    /// reports as a non-fatal registration failure.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;
}
