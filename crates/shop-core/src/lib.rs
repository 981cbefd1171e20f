//! # shop-core
//!
//! Domain layer containing entities, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Business, NewProduct, Product, User, DEFAULT_BUSINESS_LOGO, DEFAULT_PRODUCT_IMAGE,
};
pub use error::DomainError;
pub use traits::{BusinessRepository, ProductRepository, RepoResult, UserRepository};
