//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user input
//! also implement `Validate` for shape validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
///
/// The password is not strength-checked; any string the caller supplies is
/// hashed as-is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 20, message = "Username must be 1-20 characters"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 200, message = "Email must be at most 200 characters")
    )]
    pub email: String,

    pub password: String,
}

/// User login request (submitted as a form, OAuth2 password-flow shape)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Email verification request (JSON variant of the email link)
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

// ============================================================================
// Product Requests
// ============================================================================

/// Create product request
///
/// The discount percentage and the stored image are server-assigned and
/// cannot be supplied here. Price cross-field rules are enforced by the
/// product service so their messages stay exact.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Product name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 30, message = "Category must be 1-30 characters"))]
    pub category: String,

    pub original_price: Decimal,

    pub current_price: Decimal,

    /// Defaults to the current date when omitted
    pub discount_expiry_date: Option<NaiveDate>,
}
