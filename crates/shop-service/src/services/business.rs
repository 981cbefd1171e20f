//! Business service
//!
//! Logo upload for the authenticated user's business.

use shop_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::UploadResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Business service
pub struct BusinessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BusinessService<'a> {
    /// Create a new BusinessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an uploaded logo and point the business at it
    ///
    /// The file is written and resized before the owning business is
    /// looked up; when the lookup fails the stored file is removed so
    /// nothing is orphaned on disk.
    #[instrument(skip(self, bytes), fields(filename = %original_filename))]
    pub async fn upload_logo(
        &self,
        user_id: i64,
        original_filename: &str,
        bytes: &[u8],
    ) -> ServiceResult<UploadResponse> {
        let stored = self.ctx.media().save_image(original_filename, bytes).await?;

        let business = match self.ctx.business_repo().find_by_owner(user_id).await? {
            Some(business) => business,
            None => {
                self.ctx.media().delete_image(&stored).await;
                return Err(DomainError::BusinessMissingForOwner(user_id).into());
            }
        };

        // Drop the previous upload; the reserved default is never deleted
        self.ctx.media().delete_image(&business.logo).await;

        self.ctx
            .business_repo()
            .update_logo(business.id, &stored)
            .await?;

        info!(business_id = business.id, stored = %stored, "Business logo updated");

        Ok(UploadResponse::stored(stored))
    }
}
