//! Registration service
//!
//! Creates the user, their business, and the verification email as one
//! explicit sequence. Every step after the first has a compensation
//! path: if a later step fails, the earlier writes are deleted so the
//! username, email, and business name become free again and the caller
//! can simply register again.

use shop_common::auth::hash_password;
use tracing::{error, info, instrument, warn};

use crate::dto::{RegisterRequest, RegisterResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message returned when the verification mail cannot be handed to the
/// transport. The account no longer exists at that point.
const MAIL_FAILURE_MESSAGE: &str = "Could not send verification mail to user. Register again later.";

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    /// Create a new RegistrationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    ///
    /// Creates an unverified user, a business named after the username,
    /// and sends the verification email. A mail failure rolls back both
    /// rows and reports 502.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user (unique username/email enforced by the store)
        let user = self
            .ctx
            .user_repo()
            .create(&request.username, &request.email, &password_hash)
            .await?;

        // Create the business named after the username
        let business = match self.ctx.business_repo().create(&user.username, user.id).await {
            Ok(business) => business,
            Err(e) => {
                warn!(user_id = user.id, error = %e, "Business creation failed, rolling back user");
                self.delete_user(user.id).await;
                return Err(e.into());
            }
        };

        // Issue the verification token
        let token = match self.ctx.jwt_service().encode_token(user.id, &user.username) {
            Ok(token) => token,
            Err(e) => {
                warn!(user_id = user.id, "Token encoding failed, rolling back registration");
                self.delete_business_and_user(business.id, user.id).await;
                return Err(ServiceError::internal(e.to_string()));
            }
        };

        // Send the verification email
        if let Err(e) = self.ctx.mailer().send_verification(&user.email, &token).await {
            warn!(user_id = user.id, error = %e, "Verification mail failed, rolling back registration");
            self.delete_business_and_user(business.id, user.id).await;
            return Err(ServiceError::mail(MAIL_FAILURE_MESSAGE));
        }

        info!(user_id = user.id, "User registered, verification mail sent");

        Ok(RegisterResponse::for_user(&user.username))
    }

    /// Delete the business, then the user. Failures are logged and not
    /// propagated so the original error reaches the caller.
    async fn delete_business_and_user(&self, business_id: i64, user_id: i64) {
        if let Err(e) = self.ctx.business_repo().delete(business_id).await {
            error!(business_id, error = %e, "Rollback failed to delete business");
        }
        self.delete_user(user_id).await;
    }

    async fn delete_user(&self, user_id: i64) {
        if let Err(e) = self.ctx.user_repo().delete(user_id).await {
            error!(user_id, error = %e, "Rollback failed to delete user");
        }
    }
}
