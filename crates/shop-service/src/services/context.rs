//! Service context - dependency container for services
//!
//! Holds the repositories, mail transport, media store, and other
//! dependencies needed by services.

use std::sync::Arc;

use shop_common::auth::JwtService;
use shop_core::traits::{BusinessRepository, ProductRepository, UserRepository};
use shop_db::PgPool;
use shop_mailer::Mailer;
use shop_media::MediaStore;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Outbound mail transport
/// - Filesystem media store
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    business_repo: Arc<dyn BusinessRepository>,
    product_repo: Arc<dyn ProductRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    mailer: Arc<dyn Mailer>,
    media: Arc<MediaStore>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        business_repo: Arc<dyn BusinessRepository>,
        product_repo: Arc<dyn ProductRepository>,
        jwt_service: Arc<JwtService>,
        mailer: Arc<dyn Mailer>,
        media: Arc<MediaStore>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            business_repo,
            product_repo,
            jwt_service,
            mailer,
            media,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the business repository
    pub fn business_repo(&self) -> &dyn BusinessRepository {
        self.business_repo.as_ref()
    }

    /// Get the product repository
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the outbound mail transport
    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    /// Get the media store
    pub fn media(&self) -> &MediaStore {
        self.media.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("mailer", &"...")
            .field("media", &self.media)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    business_repo: Option<Arc<dyn BusinessRepository>>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    mailer: Option<Arc<dyn Mailer>>,
    media: Option<Arc<MediaStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            business_repo: None,
            product_repo: None,
            jwt_service: None,
            mailer: None,
            media: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn business_repo(mut self, repo: Arc<dyn BusinessRepository>) -> Self {
        self.business_repo = Some(repo);
        self
    }

    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn media(mut self, media: Arc<MediaStore>) -> Self {
        self.media = Some(media);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.business_repo.ok_or_else(|| {
                super::error::ServiceError::validation("business_repo is required")
            })?,
            self.product_repo
                .ok_or_else(|| super::error::ServiceError::validation("product_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
            self.mailer
                .ok_or_else(|| super::error::ServiceError::validation("mailer is required"))?,
            self.media
                .ok_or_else(|| super::error::ServiceError::validation("media is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
