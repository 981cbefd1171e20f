//! Authentication handlers
//!
//! Endpoints for login and email verification.

use axum::{
    extract::{Query, State},
    response::Html,
    Form, Json,
};
use shop_service::{
    AuthService, LoginRequest, TokenResponse, VerificationResponse, VerifyEmailRequest,
};

use crate::response::ApiResult;
use crate::state::AppState;

/// Login with username and password
///
/// POST /token
///
/// Credentials arrive form-encoded, OAuth2 password-flow style.
pub async fn login(
    State(state): State<AppState>,
    Form(request): Form<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Query parameters for the emailed verification link
#[derive(Debug, serde::Deserialize)]
pub struct VerificationParams {
    pub token: String,
}

/// Verify an account from the emailed link
///
/// GET /verification?token=...
///
/// Browser endpoint; responds with an HTML confirmation page. Visiting
/// the link again after verification shows the same page.
pub async fn verification_page(
    State(state): State<AppState>,
    Query(params): Query<VerificationParams>,
) -> ApiResult<Html<String>> {
    let service = AuthService::new(state.service_context());
    let response = service.verify_email(&params.token).await?;
    Ok(Html(confirmation_page(&response.username)))
}

/// Verify an account, JSON variant
///
/// POST /verification
pub async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyEmailRequest>,
) -> ApiResult<Json<VerificationResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.verify_email(&request.token).await?;
    Ok(Json(response))
}

fn confirmation_page(username: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Account Verification</title>
</head>
<body>
    <h3>Account Verification Successful</h3>
    <p>Hello {username}, your account has been verified. You can now log in and start selling.</p>
</body>
</html>
"#
    )
}
