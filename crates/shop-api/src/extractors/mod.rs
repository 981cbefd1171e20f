//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path parameters,
//! and file uploads.

mod auth;
mod path;
mod upload;
mod validated;

pub use auth::{AuthUser, VerifiedUser};
pub use path::ProductIdPath;
pub use upload::ImageUpload;
pub use validated::ValidatedJson;
