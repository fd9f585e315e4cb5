//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository, keyed by username
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let map = users
            .into_iter()
            .map(|user| (user.username().as_str().to_string(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let username = user.username().as_str().to_string();

        if users.contains_key(&username) {
            return Err(DomainError::duplicate_user(username));
        }

        users.insert(username, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let username = user.username().as_str().to_string();

        if !users.contains_key(&username) {
            return Err(DomainError::user_not_found(username));
        }

        users.insert(username, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, username: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(username).is_some())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Username;

    fn create_test_user(username: &str) -> User {
        let username = Username::new(username).unwrap();
        User::new(username, "ciphertext", "user", vec![0u8; 32])
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("alice");

        repo.insert(user).await.unwrap();

        let retrieved = repo.find_by_username("alice").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().username().as_str(), "alice");

        let not_found = repo.find_by_username("nonexistent").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert() {
        let repo = InMemoryUserRepository::new();

        repo.insert(create_test_user("alice")).await.unwrap();

        let result = repo.insert(create_test_user("alice")).await;
        assert!(matches!(result, Err(DomainError::DuplicateUser { .. })));
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryUserRepository::new();
        let mut user = create_test_user("alice");

        repo.insert(user.clone()).await.unwrap();

        user.set_password("newciphertext");
        repo.update(&user).await.unwrap();

        let retrieved = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(retrieved.password(), "newciphertext");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("ghost");

        let result = repo.update(&user).await;
        assert!(matches!(result, Err(DomainError::UserNotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();

        repo.insert(create_test_user("alice")).await.unwrap();

        assert!(repo.delete("alice").await.unwrap());
        assert!(!repo.delete("alice").await.unwrap());

        let retrieved = repo.find_by_username("alice").await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = InMemoryUserRepository::new();

        repo.insert(create_test_user("alice")).await.unwrap();

        assert!(repo.exists("alice").await.unwrap());
        assert!(!repo.exists("bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let repo = InMemoryUserRepository::new();

        repo.insert(create_test_user("alice")).await.unwrap();
        repo.insert(create_test_user("bob")).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_with_users() {
        let repo = InMemoryUserRepository::with_users(vec![
            create_test_user("alice"),
            create_test_user("bob"),
        ]);

        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.exists("alice").await.unwrap());
    }
}
