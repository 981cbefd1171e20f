//! Path parameter extractors
//!
//! Type-safe extraction of numeric ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Extract a product id from the `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct ProductIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("Invalid product id"))?;

        Ok(ProductIdPath(id))
    }
}
