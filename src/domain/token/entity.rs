//! Token entity

use serde::Serialize;

use crate::domain::user::User;

/// Bearer token pairing an opaque unguessable value with the
/// authenticated user. Valid until explicitly invalidated.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    /// Opaque token value, globally unique while registered
    value: String,
    /// The user this token authenticates
    user: User,
}

impl Token {
    /// Create a new token
    pub fn new(value: impl Into<String>, user: User) -> Self {
        Self {
            value: value.into(),
            user,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}
