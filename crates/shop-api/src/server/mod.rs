//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use shop_common::{AppConfig, AppError, JwtService, MailDriver};
use shop_db::{
    create_pool, run_migrations, PgBusinessRepository, PgProductRepository, PgUserRepository,
};
use shop_mailer::{LogMailer, Mailer, SmtpMailer};
use shop_media::MediaStore;
use shop_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(state.config());
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = shop_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret));

    // Create media store and its upload directory
    let media = MediaStore::new(&config.storage.upload_dir);
    media
        .ensure_root()
        .await
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Pick the mail transport from configuration
    let mailer: Arc<dyn Mailer> = match config.mail.driver {
        MailDriver::Smtp => Arc::new(
            SmtpMailer::from_config(&config.mail).map_err(|e| AppError::Config(e.to_string()))?,
        ),
        MailDriver::Log => Arc::new(LogMailer::new(&config.mail.public_base_url)),
    };

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let business_repo = Arc::new(PgBusinessRepository::new(pool.clone()));
    let product_repo = Arc::new(PgProductRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .business_repo(business_repo)
        .product_repo(product_repo)
        .jwt_service(jwt_service)
        .mailer(mailer)
        .media(Arc::new(media))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    // The rate limiter keys on the peer address, which only exists
    // when the service is built with connect info
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
