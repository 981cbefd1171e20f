//! User service
//!
//! Read-side queries for the authenticated account.

use shop_core::error::DomainError;
use tracing::instrument;

use crate::dto::{BusinessResponse, CurrentUserResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the authenticated user together with their business
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: i64) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        // Registration guarantees the business, so a miss is data damage
        let business = self
            .ctx
            .business_repo()
            .find_by_owner(user.id)
            .await?
            .ok_or(DomainError::BusinessMissingForOwner(user.id))?;

        Ok(CurrentUserResponse {
            user: UserResponse::from(&user),
            business: BusinessResponse::from(&business),
        })
    }
}
