//! Service layer for classified ads on top of `models`.
//! - Repository traits separate business rules from data access, with SeaORM and in-memory implementations.
//! - Image assets go through the `asset::AssetStore` seam.
//! - Errors surface as `errors::ServiceError`.

pub mod errors;
pub mod asset;
pub mod user;
pub mod ad;
#[cfg(test)]
pub mod test_support;
