//! Key provisioning
//!
//! Generates cryptographically random symmetric keys of the fixed valid
//! AES lengths.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::DomainError;

/// Key lengths accepted by the AES cipher, in bytes
pub const VALID_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// Generate a random symmetric key of the requested length
///
/// Fails with `InvalidKeyLength` for any length other than 16, 24, or 32.
pub fn generate_key(length_bytes: usize) -> Result<Vec<u8>, DomainError> {
    if !VALID_KEY_LENGTHS.contains(&length_bytes) {
        return Err(DomainError::invalid_key_length(length_bytes));
    }

    let mut key = vec![0u8; length_bytes];
    OsRng.fill_bytes(&mut key);

    Ok(key)
}
