//! Cipher selection by algorithm name
//!
//! A single supported algorithm today; the tagged-variant shape keeps the
//! selection seam without dynamic dispatch.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::cipher::{AesCipher, Cipher};
use crate::domain::DomainError;

/// Supported cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Aes,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aes => "aes",
        }
    }
}

impl FromStr for Algorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes" => Ok(Self::Aes),
            _ => Err(DomainError::invalid_algorithm(s)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
enum CipherKind {
    Aes(AesCipher),
}

/// Cipher service bound to a fixed algorithm and key at construction
#[derive(Debug, Clone)]
pub struct CipherService {
    algorithm: Algorithm,
    kind: CipherKind,
}

impl CipherService {
    /// Create a service for the given algorithm and key
    ///
    /// Fails with `Crypto` when the key length does not fit the algorithm.
    pub fn new(algorithm: Algorithm, key: &[u8]) -> Result<Self, DomainError> {
        let kind = match algorithm {
            Algorithm::Aes => CipherKind::Aes(AesCipher::new(key)?),
        };

        Ok(Self { algorithm, kind })
    }

    /// Create a service from an algorithm name
    ///
    /// Fails with `InvalidAlgorithm` for unrecognized names.
    pub fn from_name(name: &str, key: &[u8]) -> Result<Self, DomainError> {
        Self::new(name.parse()?, key)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl Cipher for CipherService {
    fn encrypt(&self, plaintext: &str) -> Result<String, DomainError> {
        match &self.kind {
            CipherKind::Aes(cipher) => cipher.encrypt(plaintext),
        }
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, DomainError> {
        match &self.kind {
            CipherKind::Aes(cipher) => cipher.decrypt(ciphertext),
        }
    }
}
