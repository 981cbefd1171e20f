//! User handlers
//!
//! Registration and the current-user endpoint.

use axum::{extract::State, Json};
use shop_service::{
    CurrentUserResponse, RegisterRequest, RegisterResponse, RegistrationService, UserService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /users
///
/// Creates the user and their business, then sends the verification
/// mail. Any failure along the way undoes the earlier steps, so a
/// retry starts from a clean slate.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Get the authenticated user's profile with their business
///
/// GET /users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.current_user(auth.user.id).await?;
    Ok(Json(response))
}
