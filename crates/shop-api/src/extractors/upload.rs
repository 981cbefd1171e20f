//! Multipart upload extractor
//!
//! Pulls the single `file` field out of a `multipart/form-data` body.
//! Extension checks and storage happen in the media layer; this only
//! carries the bytes and the client's filename.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};

use crate::response::ApiError;

/// Name of the multipart field carrying the image
const FILE_FIELD: &str = "file";

/// An image file read from a multipart body
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Filename as sent by the client, used for the extension check
    pub filename: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

#[async_trait]
impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_upload(e.to_string()))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_upload(e.to_string()))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let filename = field
                .file_name()
                .map(ToString::to_string)
                .ok_or_else(|| ApiError::invalid_upload("Missing filename on file field"))?;

            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::invalid_upload(e.to_string()))?;

            return Ok(ImageUpload {
                filename,
                bytes: bytes.to_vec(),
            });
        }

        Err(ApiError::invalid_upload("Missing file field"))
    }
}
