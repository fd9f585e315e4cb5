//! Authentication service
//!
//! Verifies a password by re-encrypting it under the user's key and
//! comparing against the stored ciphertext, then issues a bearer token.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::user::UserRepository;
use crate::domain::{DomainError, Token, TokenRegistry};
use crate::infrastructure::crypto::{constant_time_compare, Algorithm, Cipher, CipherService};

/// Orchestrates password verification and token issuance
#[derive(Debug)]
pub struct AuthenticationService<R: UserRepository, T: TokenRegistry> {
    repository: Arc<R>,
    registry: Arc<T>,
    algorithm: Algorithm,
}

impl<R: UserRepository, T: TokenRegistry> AuthenticationService<R, T> {
    /// Create a new authentication service
    pub fn new(repository: Arc<R>, registry: Arc<T>, algorithm: Algorithm) -> Self {
        Self {
            repository,
            registry,
            algorithm,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Authenticate a user and issue a token
    ///
    /// All authentication failures collapse to `InvalidCredentials` at
    /// this boundary so callers cannot probe whether a username exists
    /// or a key is misconfigured; the underlying cause is logged.
    /// Storage failures propagate unchanged.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Token, DomainError> {
        match self.verify(username, password).await {
            Ok(token) => {
                info!(username, "authentication succeeded");
                Ok(token)
            }
            Err(err @ DomainError::Storage { .. }) => {
                error!(username, error = %err, "authentication aborted: storage failure");
                Err(err)
            }
            Err(DomainError::InvalidCredentials) => {
                warn!(username, "authentication failed: invalid credentials");
                Err(DomainError::InvalidCredentials)
            }
            Err(err) => {
                warn!(username, error = %err, "authentication failed");
                Err(DomainError::InvalidCredentials)
            }
        }
    }

    /// The internal decision procedure, with causes kept distinct
    async fn verify(&self, username: &str, password: &str) -> Result<Token, DomainError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::user_not_found(username))?;

        let cipher = CipherService::new(self.algorithm, user.key())?;
        let supplied = cipher.encrypt(password)?;

        if !constant_time_compare(&supplied, user.password()) {
            return Err(DomainError::InvalidCredentials);
        }

        let value = self.registry.issue(&user).await?;
        Ok(Token::new(value, user))
    }
}
