//! Product handlers
//!
//! CRUD endpoints for the product catalog. Listing and detail are
//! public; everything that writes requires a verified owner.

use axum::{extract::State, Json};
use shop_service::{
    CreateProductRequest, ProductDetailResponse, ProductResponse, ProductService, UploadResponse,
};

use crate::extractors::{ImageUpload, ProductIdPath, ValidatedJson, VerifiedUser};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a product under the caller's business
///
/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    auth: VerifiedUser,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<Json<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let response = service.create(auth.user.id, request).await?;
    Ok(Created(Json(response)))
}

/// List all products
///
/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let products = service.list().await?;
    Ok(Json(products))
}

/// Get a product with its business
///
/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    ProductIdPath(product_id): ProductIdPath,
) -> ApiResult<Json<ProductDetailResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service.get_detail(product_id).await?;
    Ok(Json(response))
}

/// Delete a product owned by the caller
///
/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    auth: VerifiedUser,
    ProductIdPath(product_id): ProductIdPath,
) -> ApiResult<NoContent> {
    let service = ProductService::new(state.service_context());
    service.delete(auth.user.id, product_id).await?;
    Ok(NoContent)
}

/// Upload an image for a product owned by the caller
///
/// POST /products/{id}/image
pub async fn upload_product_image(
    State(state): State<AppState>,
    auth: VerifiedUser,
    ProductIdPath(product_id): ProductIdPath,
    upload: ImageUpload,
) -> ApiResult<Json<UploadResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service
        .upload_image(auth.user.id, product_id, &upload.filename, &upload.bytes)
        .await?;
    Ok(Json(response))
}
