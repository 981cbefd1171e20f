//! Authentication service
//!
//! Handles login, email verification, and token-to-user resolution.

use shop_common::auth::verify_password;
use shop_common::AppError;
use shop_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, TokenResponse, VerificationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    ///
    /// Unknown username and wrong password produce the identical error so
    /// callers cannot probe which field was wrong.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        // Find user by username
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Issue token with claims {id, username}
        let token = self
            .ctx
            .jwt_service()
            .encode_token(user.id, &user.username)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = user.id, "User logged in successfully");

        Ok(TokenResponse::new(token))
    }

    /// Verify an account from an emailed token
    ///
    /// A garbled token and a token referencing a deleted user both collapse
    /// to the same unauthorized error. Verifying an already-verified account
    /// is an idempotent success.
    #[instrument(skip(self, token))]
    pub async fn verify_email(&self, token: &str) -> ServiceResult<VerificationResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .decode_token(token)
            .map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(claims.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = claims.id, "Verification failed: user no longer exists");
                ServiceError::App(AppError::InvalidToken)
            })?;

        if user.is_verified {
            info!(user_id = user.id, "Account already verified");
        } else {
            self.ctx.user_repo().mark_verified(user.id).await?;
            info!(user_id = user.id, "Account verified");
        }

        Ok(VerificationResponse {
            username: user.username,
            verified: true,
        })
    }

    /// Resolve a bearer token to its user
    ///
    /// Any decode failure or missing user yields the same unauthorized error.
    #[instrument(skip(self, token))]
    pub async fn get_user_from_token(&self, token: &str) -> ServiceResult<User> {
        let claims = self
            .ctx
            .jwt_service()
            .decode_token(token)
            .map_err(ServiceError::from)?;

        self.ctx
            .user_repo()
            .find_by_id(claims.id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))
    }
}
