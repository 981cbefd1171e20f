//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Ids are assigned by the store, so `create` methods return the persisted
//! entity rather than taking one. Deletes are hard deletes: registration
//! compensation relies on the unique username/email/business-name keys
//! becoming free again.

use async_trait::async_trait;

use crate::entities::{Business, NewProduct, Product, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new, unverified user
    async fn create(&self, username: &str, email: &str, password_hash: &str) -> RepoResult<User>;

    /// Set `is_verified` on an account
    async fn mark_verified(&self, id: i64) -> RepoResult<()>;

    /// Hard delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Business Repository
// ============================================================================

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find business by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Business>>;

    /// Find the business owned by a user
    async fn find_by_owner(&self, owner_id: i64) -> RepoResult<Option<Business>>;

    /// Create a business with default city/region/logo
    async fn create(&self, name: &str, owner_id: i64) -> RepoResult<Business>;

    /// Replace the stored logo filename
    async fn update_logo(&self, id: i64, logo: &str) -> RepoResult<()>;

    /// Hard delete a business
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>>;

    /// List all products
    async fn list(&self) -> RepoResult<Vec<Product>>;

    /// Create a new product
    async fn create(&self, product: &NewProduct) -> RepoResult<Product>;

    /// Replace the stored image filename
    async fn update_image(&self, id: i64, image: &str) -> RepoResult<()>;

    /// Hard delete a product
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
