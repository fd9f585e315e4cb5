//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Storage failures surface as `DomainError::Storage`, distinct from
/// a successful lookup that found nothing.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user (password/key/role)
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Delete a user; returns whether a record was removed
    async fn delete(&self, username: &str) -> Result<bool, DomainError>;

    /// List all users
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a username exists
    async fn exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
