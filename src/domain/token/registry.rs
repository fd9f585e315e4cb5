//! Token registry trait

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::user::User;
use crate::domain::DomainError;

/// Registry governing the token lifecycle: issuance, validation, and
/// revocation.
///
/// Instances are explicitly owned and injected into whatever needs them;
/// there is no process-global registry, so tests run isolated instances.
/// Tokens carry no expiry: a value stays valid until invalidated or the
/// registry is torn down.
#[async_trait]
pub trait TokenRegistry: Send + Sync + Debug {
    /// Generate a fresh unguessable token value bound to the user and
    /// register it. A value currently registered is never reissued.
    async fn issue(&self, user: &User) -> Result<String, DomainError>;

    /// True iff the value is currently registered
    async fn is_valid(&self, value: &str) -> Result<bool, DomainError>;

    /// Remove the value if registered; invalidating an absent token is a
    /// no-op, never an error
    async fn invalidate(&self, value: &str) -> Result<(), DomainError>;

    /// Number of currently registered tokens
    async fn active_count(&self) -> Result<usize, DomainError>;
}
