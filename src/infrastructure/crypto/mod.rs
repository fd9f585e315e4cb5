//! Cryptography infrastructure
//!
//! The symmetric cipher behind stored-credential protection, algorithm
//! selection, and key provisioning.

mod cipher;
mod keygen;
mod service;

pub use cipher::{constant_time_compare, AesCipher, Cipher};
pub use keygen::{generate_key, VALID_KEY_LENGTHS};
pub use service::{Algorithm, CipherService};
