//! Database models - SQLx-compatible structs for PostgreSQL tables

mod business;
mod product;
mod user;

pub use business::BusinessModel;
pub use product::ProductModel;
pub use user::UserModel;
