//! Authentication extractors
//!
//! Extract the bearer token from the Authorization header and resolve it
//! to a full user row. Token claims carry only `{id, username}`, so the
//! account state (verified or not) always comes from the store.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use shop_common::AppError;
use shop_core::entities::User;
use shop_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The account the token belongs to
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        let app_state = AppState::from_ref(state);

        // Decode the token and load the account behind it
        let service = AuthService::new(app_state.service_context());
        let user = service.get_user_from_token(bearer.token()).await?;

        Ok(AuthUser { user })
    }
}

/// Authenticated user whose email address has been verified
///
/// Mutating endpoints require this. A token from an unverified account
/// still authenticates, but is rejected here with a 403.
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    /// The verified account
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for VerifiedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_verified {
            tracing::warn!(user_id = user.id, "Unverified account blocked");
            return Err(ApiError::App(AppError::UnverifiedAccount));
        }

        Ok(VerifiedUser { user })
    }
}
