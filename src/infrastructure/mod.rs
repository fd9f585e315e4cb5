//! Infrastructure layer - Concrete service and storage implementations

pub mod auth;
pub mod crypto;
pub mod logging;
pub mod token;
pub mod user;
