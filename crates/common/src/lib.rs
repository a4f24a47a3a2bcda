//! Shared plumbing for the classifieds workspace: logging setup,
//! pagination primitives and runtime environment checks.

pub mod utils;
pub mod pagination;
pub mod env;

pub use pagination::{Page, Pagination};
