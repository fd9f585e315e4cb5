use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported cipher algorithm: '{name}'")]
    InvalidAlgorithm { name: String },

    #[error("Invalid key length: {length} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { length: usize },

    #[error("Crypto error: {message}")]
    Crypto { message: String },

    #[error("User '{username}' not found")]
    UserNotFound { username: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User '{username}' already exists")]
    DuplicateUser { username: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn invalid_algorithm(name: impl Into<String>) -> Self {
        Self::InvalidAlgorithm { name: name.into() }
    }

    pub fn invalid_key_length(length: usize) -> Self {
        Self::InvalidKeyLength { length }
    }

    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto {
            message: message.into(),
        }
    }

    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    pub fn duplicate_user(username: impl Into<String>) -> Self {
        Self::DuplicateUser {
            username: username.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
