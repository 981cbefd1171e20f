//! Repository traits (ports)

mod repositories;

pub use repositories::{BusinessRepository, ProductRepository, RepoResult, UserRepository};
