//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Business not found: {0}")]
    BusinessNotFound(i64),

    #[error("No business registered for user: {0}")]
    BusinessMissingForOwner(i64),

    #[error("Product does not exist")]
    ProductNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You are not the owner of this business")]
    NotBusinessOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailTaken,

    #[error("Business name already in use")]
    BusinessNameTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BusinessNotFound(_) | Self::BusinessMissingForOwner(_) => "UNKNOWN_BUSINESS",
            Self::ProductNotFound(_) => "UNKNOWN_PRODUCT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",

            // Authorization
            Self::NotBusinessOwner => "NOT_OWNER",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::BusinessNameTaken => "BUSINESS_NAME_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BusinessNotFound(_)
                | Self::BusinessMissingForOwner(_)
                | Self::ProductNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::InvalidUsername(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotBusinessOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken | Self::EmailTaken | Self::BusinessNameTaken
        )
    }
}
