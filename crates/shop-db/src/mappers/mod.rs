//! Entity to model mappers
//!
//! This module provides conversions from database models to domain entities
//! (shop-core). Inserts bind primitive values directly; the store assigns
//! ids and column defaults, so there are no `*Insert` helper structs here.

mod business;
mod product;
mod user;
