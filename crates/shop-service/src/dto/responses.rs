//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Public mount point for stored images, shared with the router.
pub const STATIC_IMAGES_PATH: &str = "/static/images";

// ============================================================================
// Auth Responses
// ============================================================================

/// Registration confirmation
///
/// Carries only a status and a check-your-email message. Tokens and
/// password material never appear here.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub status: String,
    pub data: String,
}

impl RegisterResponse {
    pub fn for_user(username: &str) -> Self {
        Self {
            status: "ok".to_string(),
            data: format!(
                "Hi {username}, Check your email and click the link to complete registration."
            ),
        }
    }
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Email verification outcome (JSON variant)
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResponse {
    pub username: String,
    pub verified: bool,
}

// ============================================================================
// User / Business Responses
// ============================================================================

/// User profile (never includes password material)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub date_joined: DateTime<Utc>,
}

/// Business profile
#[derive(Debug, Clone, Serialize)]
pub struct BusinessResponse {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub logo: String,
    pub owner_id: i64,
}

/// Current authenticated user with their business
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
    pub business: BusinessResponse,
}

// ============================================================================
// Product Responses
// ============================================================================

/// Product listing entry
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub original_price: Decimal,
    pub current_price: Decimal,
    pub discount: i32,
    pub discount_expiry_date: NaiveDate,
    pub image: String,
    pub business_id: i64,
}

/// Product detail with its owning business
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    pub business: BusinessResponse,
}

// ============================================================================
// Upload Responses
// ============================================================================

/// Result of a successful image upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub status: String,
    pub filename: String,
    pub url: String,
}

impl UploadResponse {
    pub fn stored(filename: String) -> Self {
        let url = format!("{STATIC_IMAGES_PATH}/{filename}");
        Self {
            status: "ok".to_string(),
            filename,
            url,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: &str, version: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
