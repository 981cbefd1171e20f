//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in shop-core.
//! Each repository handles database operations for a specific domain entity.

mod business;
mod error;
mod product;
mod user;

pub use business::PgBusinessRepository;
pub use product::PgProductRepository;
pub use user::PgUserRepository;
