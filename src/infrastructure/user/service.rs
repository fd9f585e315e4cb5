//! User service for the credential lifecycle

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::user::{User, Username, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::crypto::{
    constant_time_compare, generate_key, Algorithm, Cipher, CipherService,
};

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Service owning registration, password changes, key rotation, and
/// revocation of stored credentials
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    /// Length of per-user keys provisioned at registration
    key_length: usize,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, key_length: usize) -> Self {
        Self {
            repository,
            key_length,
        }
    }

    /// Register a new user
    ///
    /// Provisions a fresh per-user key, encrypts the password under it,
    /// and persists the record. Fails with `DuplicateUser` when the
    /// username is taken.
    pub async fn register(
        &self,
        request: RegisterUserRequest,
        algorithm: Algorithm,
    ) -> Result<User, DomainError> {
        let username = Username::new(&request.username)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.exists(username.as_str()).await? {
            warn!(username = %username, "registration rejected: username taken");
            return Err(DomainError::duplicate_user(username.as_str()));
        }

        let key = generate_key(self.key_length)?;
        let cipher = CipherService::new(algorithm, &key)?;
        let ciphertext = cipher.encrypt(&request.password)?;

        let user = User::new(username, ciphertext, request.role, key);
        let user = self.repository.insert(user).await?;

        info!(username = %user.username(), role = user.role(), "registered user");
        Ok(user)
    }

    /// Re-encrypt a new password under the user's existing key and
    /// overwrite the stored ciphertext
    pub async fn change_password(
        &self,
        username: &str,
        new_password: &str,
        algorithm: Algorithm,
    ) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::user_not_found(username))?;

        let cipher = CipherService::new(algorithm, user.key())?;
        user.set_password(cipher.encrypt(new_password)?);

        let user = self.repository.update(&user).await?;

        info!(username = %user.username(), "password changed");
        Ok(user)
    }

    /// Rotate the user's symmetric key
    ///
    /// The stored ciphertext cannot be re-keyed without the plaintext, so
    /// the caller must present the current password; it is verified
    /// against the stored ciphertext before a new key is provisioned.
    pub async fn rotate_key(
        &self,
        username: &str,
        password: &str,
        algorithm: Algorithm,
    ) -> Result<User, DomainError> {
        let mut user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::user_not_found(username))?;

        let cipher = CipherService::new(algorithm, user.key())?;
        let supplied = cipher.encrypt(password)?;

        if !constant_time_compare(&supplied, user.password()) {
            warn!(username = %user.username(), "key rotation rejected: bad password");
            return Err(DomainError::InvalidCredentials);
        }

        let new_key = generate_key(self.key_length)?;
        let new_cipher = CipherService::new(algorithm, &new_key)?;

        user.set_password(new_cipher.encrypt(password)?);
        user.set_key(new_key);

        let user = self.repository.update(&user).await?;

        info!(username = %user.username(), "key rotated");
        Ok(user)
    }

    /// Delete the user record
    ///
    /// Outstanding tokens for the user are left untouched; invalidating
    /// them is an explicit, separate call on the token registry.
    pub async fn revoke(&self, username: &str) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(username).await?;

        if deleted {
            info!(username, "revoked user");
        } else {
            warn!(username, "revoke requested for unknown user");
        }

        Ok(deleted)
    }

    /// Get a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.repository.find_by_username(username).await
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Check if a username exists
    pub async fn exists(&self, username: &str) -> Result<bool, DomainError> {
        self.repository.exists(username).await
    }
}
