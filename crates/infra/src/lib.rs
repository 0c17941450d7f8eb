//! Infrastructure layer: storage adapters behind domain-facing traits.

pub mod repository;

pub use repository::{InMemoryUserRepository, UserRepository};
