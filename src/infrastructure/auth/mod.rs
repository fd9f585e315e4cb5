//! Authentication infrastructure

mod service;

pub use service::AuthenticationService;
