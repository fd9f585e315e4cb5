//! Symmetric cipher implementations
//!
//! AES with PKCS#7 padding over a text-safe base64 encoding. The cipher
//! is deterministic: equal plaintexts under equal keys produce equal
//! ciphertexts, which the stored-ciphertext comparison in authentication
//! relies on.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for symmetric encrypt/decrypt operations over text
pub trait Cipher: Send + Sync + Debug {
    /// Encrypt a plaintext string into base64-encoded ciphertext
    fn encrypt(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Decrypt base64-encoded ciphertext back into the plaintext string
    fn decrypt(&self, ciphertext: &str) -> Result<String, DomainError>;
}

/// Key material tagged by AES variant
#[derive(Clone)]
enum AesKey {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
}

/// AES cipher keyed at construction time
///
/// The key must be exactly 16, 24, or 32 bytes; any other length is a
/// construction error.
#[derive(Clone)]
pub struct AesCipher {
    key: AesKey,
}

impl AesCipher {
    /// Create a cipher for the given key, selecting the AES variant from
    /// the key length
    pub fn new(key: &[u8]) -> Result<Self, DomainError> {
        let key = match key.len() {
            16 => {
                let mut k = [0u8; 16];
                k.copy_from_slice(key);
                AesKey::Aes128(k)
            }
            24 => {
                let mut k = [0u8; 24];
                k.copy_from_slice(key);
                AesKey::Aes192(k)
            }
            32 => {
                let mut k = [0u8; 32];
                k.copy_from_slice(key);
                AesKey::Aes256(k)
            }
            n => {
                return Err(DomainError::crypto(format!(
                    "AES key must be 16, 24, or 32 bytes, got {}",
                    n
                )))
            }
        };

        Ok(Self { key })
    }

    fn encrypt_raw(&self, data: &[u8]) -> Vec<u8> {
        match &self.key {
            AesKey::Aes128(k) => {
                ecb::Encryptor::<Aes128>::new(k.into()).encrypt_padded_vec_mut::<Pkcs7>(data)
            }
            AesKey::Aes192(k) => {
                ecb::Encryptor::<Aes192>::new(k.into()).encrypt_padded_vec_mut::<Pkcs7>(data)
            }
            AesKey::Aes256(k) => {
                ecb::Encryptor::<Aes256>::new(k.into()).encrypt_padded_vec_mut::<Pkcs7>(data)
            }
        }
    }

    fn decrypt_raw(&self, data: &[u8]) -> Result<Vec<u8>, DomainError> {
        let result = match &self.key {
            AesKey::Aes128(k) => {
                ecb::Decryptor::<Aes128>::new(k.into()).decrypt_padded_vec_mut::<Pkcs7>(data)
            }
            AesKey::Aes192(k) => {
                ecb::Decryptor::<Aes192>::new(k.into()).decrypt_padded_vec_mut::<Pkcs7>(data)
            }
            AesKey::Aes256(k) => {
                ecb::Decryptor::<Aes256>::new(k.into()).decrypt_padded_vec_mut::<Pkcs7>(data)
            }
        };

        result.map_err(|_| DomainError::crypto("decryption failed: corrupted ciphertext or wrong key"))
    }
}

impl Cipher for AesCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, DomainError> {
        Ok(STANDARD.encode(self.encrypt_raw(plaintext.as_bytes())))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, DomainError> {
        let raw = STANDARD
            .decode(ciphertext)
            .map_err(|e| DomainError::crypto(format!("ciphertext is not valid base64: {}", e)))?;

        let plaintext = self.decrypt_raw(&raw)?;

        String::from_utf8(plaintext)
            .map_err(|_| DomainError::crypto("decrypted data is not valid UTF-8"))
    }
}

impl Debug for AesCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits = match &self.key {
            AesKey::Aes128(_) => 128,
            AesKey::Aes192(_) => 192,
            AesKey::Aes256(_) => 256,
        };
        f.debug_struct("AesCipher").field("bits", &bits).finish()
    }
}

/// Constant-time string comparison to prevent timing attacks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut result = 0u8;

    for i in 0..a.len() {
        result |= a_bytes[i] ^ b_bytes[i];
    }

    result == 0
}
