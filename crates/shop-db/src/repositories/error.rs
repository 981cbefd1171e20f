//! Error handling utilities for repositories

use shop_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and map it via the violated constraint name,
/// falling back to a generic database error otherwise
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "business not found" error
pub fn business_not_found(id: i64) -> DomainError {
    DomainError::BusinessNotFound(id)
}

/// Create a "product not found" error
pub fn product_not_found(id: i64) -> DomainError {
    DomainError::ProductNotFound(id)
}
