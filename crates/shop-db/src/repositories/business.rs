//! PostgreSQL implementation of BusinessRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use shop_core::entities::Business;
use shop_core::error::DomainError;
use shop_core::traits::{BusinessRepository, RepoResult};

use crate::models::BusinessModel;

use super::error::{business_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of BusinessRepository
#[derive(Clone)]
pub struct PgBusinessRepository {
    pool: PgPool,
}

impl PgBusinessRepository {
    /// Create a new PgBusinessRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Business>> {
        let result = sqlx::query_as::<_, BusinessModel>(
            r"
            SELECT id, name, city, region, description, logo, owner_id
            FROM businesses
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Business::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: i64) -> RepoResult<Option<Business>> {
        let result = sqlx::query_as::<_, BusinessModel>(
            r"
            SELECT id, name, city, region, description, logo, owner_id
            FROM businesses
            WHERE owner_id = $1
            ",
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Business::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str, owner_id: i64) -> RepoResult<Business> {
        // city, region, and logo fall back to their column defaults
        let model = sqlx::query_as::<_, BusinessModel>(
            r"
            INSERT INTO businesses (name, owner_id)
            VALUES ($1, $2)
            RETURNING id, name, city, region, description, logo, owner_id
            ",
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::BusinessNameTaken))?;

        Ok(Business::from(model))
    }

    #[instrument(skip(self))]
    async fn update_logo(&self, id: i64, logo: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE businesses
            SET logo = $2
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(logo)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(business_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM businesses
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(business_not_found(id));
        }

        Ok(())
    }
}
