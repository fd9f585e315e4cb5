//! Domain layer - Core entities, traits, and the error taxonomy

pub mod error;
pub mod token;
pub mod user;

pub use error::DomainError;
pub use token::{Token, TokenRegistry};
pub use user::{validate_username, User, UserRepository, Username, UsernameValidationError};
