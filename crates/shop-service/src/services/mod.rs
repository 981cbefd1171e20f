//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod business;
pub mod context;
pub mod error;
pub mod product;
pub mod registration;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use auth::AuthService;
pub use business::BusinessService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use product::ProductService;
pub use registration::RegistrationService;
pub use user::UserService;
