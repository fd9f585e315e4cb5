//! Token domain
//!
//! The bearer token entity and the registry trait governing its lifecycle.

mod entity;
mod registry;

pub use entity::Token;
pub use registry::TokenRegistry;
