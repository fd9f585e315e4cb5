//! In-memory token registry implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::user::User;
use crate::domain::{DomainError, TokenRegistry};

/// Process-local registry mapping token values to their users
///
/// State lives for the lifetime of the instance; tokens are recreated
/// empty on restart. There is no expiry sweep - revocation is explicit.
#[derive(Debug, Default)]
pub struct InMemoryTokenRegistry {
    tokens: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryTokenRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRegistry for InMemoryTokenRegistry {
    async fn issue(&self, user: &User) -> Result<String, DomainError> {
        let mut tokens = self.tokens.write().await;

        // The write lock is held across the collision check and insert,
        // so concurrent issuance cannot race on the same value.
        let mut value = Uuid::new_v4().to_string();
        while tokens.contains_key(&value) {
            value = Uuid::new_v4().to_string();
        }

        tokens.insert(value.clone(), user.clone());
        debug!(username = %user.username(), "issued token");

        Ok(value)
    }

    async fn is_valid(&self, value: &str) -> Result<bool, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.contains_key(value))
    }

    async fn invalidate(&self, value: &str) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.remove(value).is_some() {
            debug!("invalidated token");
        }

        Ok(())
    }

    async fn active_count(&self) -> Result<usize, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.len())
    }
}
