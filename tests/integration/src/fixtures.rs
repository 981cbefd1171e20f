//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. The structs here
//! mirror the API wire format instead of importing server types, so a
//! field renamed on the server breaks a test instead of both sides
//! moving together silently.

use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request (form-encoded)
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Registration response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
    pub data: String,
}

/// Issued token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Email verification request (JSON variant)
#[derive(Debug, Serialize)]
pub struct VerifyRequest {
    pub token: String,
}

/// Email verification response
#[derive(Debug, Deserialize)]
pub struct VerificationResponse {
    pub username: String,
    pub verified: bool,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub date_joined: String,
}

/// Business response
#[derive(Debug, Deserialize)]
pub struct BusinessResponse {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub region: String,
    pub description: Option<String>,
    pub logo: String,
    pub owner_id: i64,
}

/// Current user with their business
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
    pub business: BusinessResponse,
}

/// Create product request
///
/// Prices travel as decimal strings, matching what the server emits.
#[derive(Debug, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    pub original_price: String,
    pub current_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_expiry_date: Option<String>,
}

impl CreateProductRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Product {suffix}"),
            category: "electronics".to_string(),
            original_price: "100.00".to_string(),
            current_price: "75.00".to_string(),
            discount_expiry_date: None,
        }
    }

    pub fn with_prices(original: &str, current: &str) -> Self {
        let mut request = Self::unique();
        request.original_price = original.to_string();
        request.current_price = current.to_string();
        request
    }
}

/// Product response
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub original_price: String,
    pub current_price: String,
    pub discount: i32,
    pub discount_expiry_date: String,
    pub image: String,
    pub business_id: i64,
}

/// Product detail with its business
#[derive(Debug, Deserialize)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    pub business: BusinessResponse,
}

/// Upload response
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub filename: String,
    pub url: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Encode a small solid PNG for upload tests
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 30, 200]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode test png");
    buf.into_inner()
}
