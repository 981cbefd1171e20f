//! Business handlers

use axum::{extract::State, Json};
use shop_service::{BusinessService, UploadResponse};

use crate::extractors::{ImageUpload, VerifiedUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Upload a logo for the authenticated user's business
///
/// POST /business/image
///
/// Accepts a multipart `file` field, resizes it, and replaces the
/// current logo. The previous upload is removed unless it is the
/// shared default.
pub async fn upload_logo(
    State(state): State<AppState>,
    auth: VerifiedUser,
    upload: ImageUpload,
) -> ApiResult<Json<UploadResponse>> {
    let service = BusinessService::new(state.service_context());
    let response = service
        .upload_logo(auth.user.id, &upload.filename, &upload.bytes)
        .await?;
    Ok(Json(response))
}
