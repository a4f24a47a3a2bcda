//! Users own ads. Registration and lookups only; authentication lives elsewhere.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::UserService;
