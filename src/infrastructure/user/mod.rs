//! User infrastructure

mod in_memory_repository;
mod service;

pub use in_memory_repository::InMemoryUserRepository;
pub use service::{RegisterUserRequest, UserService};
