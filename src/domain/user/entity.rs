//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_username, UsernameValidationError};

/// Username - unique user identifier, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new Username after validation
    pub fn new(username: impl Into<String>) -> Result<Self, UsernameValidationError> {
        let username = username.into();
        validate_username(&username)?;
        Ok(Self(username))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity for authentication
///
/// The password field holds ciphertext at rest; plaintext only exists
/// transiently inside a request. The key is the symmetric secret bound
/// to this user, used to re-derive the stored ciphertext for comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique username, immutable once created
    username: Username,
    /// Encrypted password (base64 text) - never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
    /// Free-form role classification
    role: String,
    /// Symmetric key material (16/24/32 bytes) - never exposed in serialization
    #[serde(skip_serializing)]
    key: Vec<u8>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with an already-encrypted password
    pub fn new(
        username: Username,
        password: impl Into<String>,
        role: impl Into<String>,
        key: Vec<u8>,
    ) -> Self {
        let now = Utc::now();

        Self {
            username,
            password: password.into(),
            role: role.into(),
            key,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Overwrite the stored password ciphertext
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.touch();
    }

    /// Update the role
    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
        self.touch();
    }

    /// Replace the symmetric key material
    pub fn set_key(&mut self, key: Vec<u8>) {
        self.key = key;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
