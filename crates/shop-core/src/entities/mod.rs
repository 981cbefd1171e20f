//! Domain entities - core business objects

mod business;
mod product;
mod user;

pub use business::{Business, DEFAULT_BUSINESS_LOGO};
pub use product::{NewProduct, Product, DEFAULT_PRODUCT_IMAGE};
pub use user::User;
