//! Ads: domain types, the ad store seam and the orchestrating service.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::{AdService, AdServiceConfig};
