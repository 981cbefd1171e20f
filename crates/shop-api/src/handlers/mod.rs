//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod business;
pub mod health;
pub mod products;
pub mod users;
