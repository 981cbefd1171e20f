//! Route definitions
//!
//! All API routes organized by domain and mounted at the server root,
//! so the emailed verification link resolves without a path prefix.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use shop_common::AppConfig;
use shop_service::STATIC_IMAGES_PATH;
use tower_http::services::ServeDir;

use crate::handlers::{auth, business, health, products, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router(config: &AppConfig) -> Router<AppState> {
    let max_upload_bytes = config.storage.max_file_size_mb as usize * 1024 * 1024;

    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(business_routes())
        .merge(product_routes())
        // Uploaded images are served straight from disk
        .nest_service(
            STATIC_IMAGES_PATH,
            ServeDir::new(&config.storage.upload_dir),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/token", post(auth::login))
        .route("/verification", get(auth::verification_page))
        .route("/verification", post(auth::verify))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register))
        .route("/users/me", get(users::get_current_user))
}

/// Business routes
fn business_routes() -> Router<AppState> {
    Router::new().route("/business/image", post(business::upload_logo))
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/products", post(products::create_product))
        .route("/products/:product_id", get(products::get_product))
        .route("/products/:product_id", delete(products::delete_product))
        .route(
            "/products/:product_id/image",
            post(products::upload_product_image),
        )
}
