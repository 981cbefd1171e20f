//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use shop_core::entities::{NewProduct, Product};
use shop_core::traits::{ProductRepository, RepoResult};

use crate::models::ProductModel;

use super::error::{map_db_error, product_not_found};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new PgProductRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, category, original_price, current_price,
                   discount, discount_expiry_date, image, business_id
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Product>> {
        let models = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, category, original_price, current_price,
                   discount, discount_expiry_date, image, business_id
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, product))]
    async fn create(&self, product: &NewProduct) -> RepoResult<Product> {
        // image falls back to its column default
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            INSERT INTO products
                (name, category, original_price, current_price,
                 discount, discount_expiry_date, business_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, category, original_price, current_price,
                      discount, discount_expiry_date, image, business_id
            ",
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.original_price)
        .bind(product.current_price)
        .bind(product.discount)
        .bind(product.discount_expiry_date)
        .bind(product.business_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Product::from(model))
    }

    #[instrument(skip(self))]
    async fn update_image(&self, id: i64, image: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET image = $2
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(image)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(id));
        }

        Ok(())
    }
}
