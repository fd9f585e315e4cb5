//! User domain
//!
//! Domain types and traits for stored credentials: the user entity,
//! username validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{User, Username};
pub use repository::UserRepository;
pub use validation::{validate_username, UsernameValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
