//! Filesystem store for uploaded images.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, instrument, warn};

use shop_core::entities::{DEFAULT_BUSINESS_LOGO, DEFAULT_PRODUCT_IMAGE};

/// Extensions accepted for upload, compared case-insensitively.
const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Stored images are re-encoded to fit within this square.
const THUMBNAIL_SIZE: u32 = 200;

/// Error type for media operations
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("File uploaded should be of type png, jpg or jpeg")]
    UnsupportedType,

    #[error("Invalid image data: {0}")]
    Decode(String),

    #[error("File storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for media operations
pub type MediaResult<T> = Result<T, MediaError>;

/// Stores uploaded images under a single root directory.
///
/// Filenames are generated server-side, so stored names never contain
/// caller-controlled path components.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Create a store rooted at `root`. The directory is not created until
    /// [`ensure_root`](Self::ensure_root) runs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory the store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a stored file.
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Create the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> MediaResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Persist an uploaded image and return its generated filename.
    ///
    /// The extension of `original_filename` must be on the allow-list;
    /// nothing is written otherwise. The payload is decoded in memory,
    /// scaled to fit within 200x200 preserving aspect ratio, and only the
    /// resized image is written to disk. Undecodable payloads never touch
    /// the filesystem.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn save_image(&self, original_filename: &str, bytes: &[u8]) -> MediaResult<String> {
        let extension = allowed_extension(original_filename).ok_or(MediaError::UnsupportedType)?;

        // Decoding sniffs the actual format, so a PNG named .jpg still loads
        let img =
            image::load_from_memory(bytes).map_err(|e| MediaError::Decode(e.to_string()))?;

        let filename = generate_filename(&extension);
        let path = self.root.join(&filename);

        if let Err(e) = img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE).save(&path) {
            let _ = tokio::fs::remove_file(&path).await;
            return Err(match e {
                image::ImageError::IoError(io) => MediaError::Io(io),
                other => MediaError::Decode(other.to_string()),
            });
        }

        debug!(filename = %filename, "Stored uploaded image");
        Ok(filename)
    }

    /// Best-effort removal of a stored file.
    ///
    /// The reserved default images are never removed. Failures are logged
    /// and swallowed; cleanup must not fail the surrounding operation.
    #[instrument(skip(self))]
    pub async fn delete_image(&self, filename: &str) {
        if is_reserved(filename) {
            return;
        }

        if let Err(e) = tokio::fs::remove_file(self.root.join(filename)).await {
            warn!(filename = %filename, error = %e, "Failed to delete image");
        }
    }
}

/// The default images shipped with the service are shared across rows and
/// must survive every delete.
fn is_reserved(filename: &str) -> bool {
    filename == DEFAULT_BUSINESS_LOGO || filename == DEFAULT_PRODUCT_IMAGE
}

/// Extract the lowercased extension when it is on the allow-list.
fn allowed_extension(filename: &str) -> Option<String> {
    let (_, extension) = filename.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();
    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

/// Random hex prefix plus a reversed digits-only timestamp. Uniqueness
/// comes from the 16 random bytes; the stamp keeps names sortable enough
/// for manual inspection.
fn generate_filename(extension: &str) -> String {
    let mut raw = [0u8; 16];
    OsRng.fill_bytes(&mut raw);
    format!("{}{}.{}", hex::encode(raw), timestamp_stamp(), extension)
}

fn timestamp_stamp() -> String {
    Utc::now()
        .format("%Y%m%d%H%M%S%f")
        .to_string()
        .chars()
        .rev()
        .collect()
}
