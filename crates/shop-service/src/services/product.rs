//! Product service
//!
//! Product CRUD plus image upload. Writes are restricted to the owner
//! of the business the product belongs to; reads are public.

use chrono::Utc;
use rust_decimal::Decimal;
use shop_core::entities::{Business, NewProduct, Product};
use shop_core::error::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{CreateProductRequest, ProductDetailResponse, ProductResponse, UploadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a product under the caller's business
    ///
    /// The discount percentage is derived from the two prices, and a
    /// missing expiry date defaults to the current date.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        user_id: i64,
        request: CreateProductRequest,
    ) -> ServiceResult<ProductResponse> {
        validate_prices(request.original_price, request.current_price)?;

        let business = self
            .ctx
            .business_repo()
            .find_by_owner(user_id)
            .await?
            .ok_or(DomainError::BusinessMissingForOwner(user_id))?;

        let discount = Product::compute_discount(request.original_price, request.current_price);
        let discount_expiry_date = request
            .discount_expiry_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let product = self
            .ctx
            .product_repo()
            .create(&NewProduct {
                name: request.name,
                category: request.category,
                original_price: request.original_price,
                current_price: request.current_price,
                discount,
                discount_expiry_date,
                business_id: business.id,
            })
            .await?;

        info!(
            product_id = product.id,
            business_id = business.id,
            "Product created"
        );

        Ok(ProductResponse::from(product))
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().list().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Fetch a product together with the business selling it
    #[instrument(skip(self))]
    pub async fn get_detail(&self, product_id: i64) -> ServiceResult<ProductDetailResponse> {
        let product = self
            .ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or(DomainError::ProductNotFound(product_id))?;

        let business = self
            .ctx
            .business_repo()
            .find_by_id(product.business_id)
            .await?
            .ok_or(DomainError::BusinessNotFound(product.business_id))?;

        Ok(ProductDetailResponse::from((product, business)))
    }

    /// Delete a product owned by the caller
    ///
    /// The stored image is removed with the row; the reserved default
    /// filename survives.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, product_id: i64) -> ServiceResult<()> {
        let (product, _business) = self.owned_product(user_id, product_id).await?;

        self.ctx.product_repo().delete(product.id).await?;
        self.ctx.media().delete_image(&product.image).await;

        info!(product_id = product.id, "Product deleted");

        Ok(())
    }

    /// Store an uploaded image and point the product at it
    ///
    /// The file is written and resized before ownership is checked; a
    /// failed check removes the stored file again.
    #[instrument(skip(self, bytes), fields(filename = %original_filename))]
    pub async fn upload_image(
        &self,
        user_id: i64,
        product_id: i64,
        original_filename: &str,
        bytes: &[u8],
    ) -> ServiceResult<UploadResponse> {
        let stored = self.ctx.media().save_image(original_filename, bytes).await?;

        let (product, _business) = match self.owned_product(user_id, product_id).await {
            Ok(pair) => pair,
            Err(e) => {
                self.ctx.media().delete_image(&stored).await;
                return Err(e);
            }
        };

        // Drop the previous upload; the reserved default is never deleted
        self.ctx.media().delete_image(&product.image).await;

        self.ctx
            .product_repo()
            .update_image(product.id, &stored)
            .await?;

        info!(product_id = product.id, stored = %stored, "Product image updated");

        Ok(UploadResponse::stored(stored))
    }

    /// Load a product and its business, requiring the caller to own it
    async fn owned_product(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> ServiceResult<(Product, Business)> {
        let product = self
            .ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or(DomainError::ProductNotFound(product_id))?;

        let business = self
            .ctx
            .business_repo()
            .find_by_id(product.business_id)
            .await?
            .ok_or(DomainError::BusinessNotFound(product.business_id))?;

        if business.owner_id != user_id {
            warn!(
                user_id,
                product_id, "Product access denied: not the business owner"
            );
            return Err(DomainError::NotBusinessOwner.into());
        }

        Ok((product, business))
    }
}

fn validate_prices(original_price: Decimal, current_price: Decimal) -> ServiceResult<()> {
    if current_price < Decimal::ZERO {
        return Err(ServiceError::validation(
            "The current price set for the product is less than 0.",
        ));
    }

    if original_price <= Decimal::ZERO {
        return Err(ServiceError::validation(
            "The original price set for the product is not acceptable. \
             Original price has to be greater than 0.",
        ));
    }

    if current_price > original_price {
        return Err(ServiceError::validation(
            "The current price set for the product is greater than the original price.",
        ));
    }

    Ok(())
}
