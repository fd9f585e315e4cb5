//! Credential vault
//!
//! Authenticates users against encrypted stored credentials and issues
//! bearer tokens that stand in for re-authentication:
//! - Symmetric cipher abstraction selectable by algorithm name
//! - Per-user key provisioning
//! - In-memory token registry (issuance, validation, revocation)
//! - Credential lifecycle services over a pluggable repository

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use infrastructure::auth::AuthenticationService;
use infrastructure::crypto::Algorithm;
use infrastructure::token::InMemoryTokenRegistry;
use infrastructure::user::{InMemoryUserRepository, UserService};
use tracing::info;

/// Services wired over the in-memory implementations
pub struct AuthState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub auth_service: Arc<AuthenticationService<InMemoryUserRepository, InMemoryTokenRegistry>>,
    pub token_registry: Arc<InMemoryTokenRegistry>,
}

/// Create the auth services with default configuration
pub fn create_auth_state() -> anyhow::Result<AuthState> {
    create_auth_state_with_config(&AppConfig::default())
}

/// Create the auth services with custom configuration
pub fn create_auth_state_with_config(config: &AppConfig) -> anyhow::Result<AuthState> {
    let algorithm: Algorithm = config.crypto.algorithm.parse()?;

    let repository = Arc::new(InMemoryUserRepository::new());
    let token_registry = Arc::new(InMemoryTokenRegistry::new());

    let user_service = Arc::new(UserService::new(
        repository.clone(),
        config.crypto.key_length_bytes,
    ));
    let auth_service = Arc::new(AuthenticationService::new(
        repository,
        token_registry.clone(),
        algorithm,
    ));

    info!(algorithm = %algorithm, key_length = config.crypto.key_length_bytes, "auth services initialized");

    Ok(AuthState {
        user_service,
        auth_service,
        token_registry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{DomainError, TokenRegistry};
    use infrastructure::user::RegisterUserRequest;

    fn make_request(username: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            role: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_authenticate_then_invalidate() {
        let state = create_auth_state().unwrap();

        state
            .user_service
            .register(make_request("alice", "secret1"), Algorithm::Aes)
            .await
            .unwrap();

        let token = state
            .auth_service
            .authenticate("alice", "secret1")
            .await
            .unwrap();
        assert_eq!(token.user().username().as_str(), "alice");
        assert!(state.token_registry.is_valid(token.value()).await.unwrap());

        let result = state.auth_service.authenticate("alice", "wrong").await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials)));

        state
            .token_registry
            .invalidate(token.value())
            .await
            .unwrap();
        assert!(!state.token_registry.is_valid(token.value()).await.unwrap());
    }

    #[tokio::test]
    async fn test_password_change_is_visible_to_authentication() {
        let state = create_auth_state().unwrap();

        state
            .user_service
            .register(make_request("bob", "first-pass"), Algorithm::Aes)
            .await
            .unwrap();

        state
            .user_service
            .change_password("bob", "second-pass", Algorithm::Aes)
            .await
            .unwrap();

        let old = state.auth_service.authenticate("bob", "first-pass").await;
        assert!(old.is_err());

        let new = state.auth_service.authenticate("bob", "second-pass").await;
        assert!(new.is_ok());
    }

    #[test]
    fn test_unknown_algorithm_in_config() {
        let mut config = AppConfig::default();
        config.crypto.algorithm = "blowfish".to_string();

        let result = create_auth_state_with_config(&config);
        assert!(result.is_err());
    }

    #[test]
    fn test_isolated_states_do_not_share_tokens() {
        let first = create_auth_state().unwrap();
        let second = create_auth_state().unwrap();

        // Registries are injected instances, not process globals
        assert!(!Arc::ptr_eq(&first.token_registry, &second.token_registry));
    }
}
