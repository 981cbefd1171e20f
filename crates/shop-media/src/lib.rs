//! # shop-media
//!
//! Storage for uploaded business logos and product images.
//!
//! ## Features
//!
//! - **Extension allow-list**: only png, jpg, and jpeg uploads are accepted
//! - **Generated filenames**: random hex plus a reversed timestamp, so
//!   stored names never contain caller input
//! - **In-place resizing**: every stored image is re-encoded to fit within
//!   200x200, preserving aspect ratio
//! - **Reserved defaults**: the shared default images are never deleted
//!
//! ## Example
//!
//! ```ignore
//! use shop_media::MediaStore;
//!
//! let store = MediaStore::new("./static/images");
//! store.ensure_root().await?;
//! let filename = store.save_image("logo.png", &bytes).await?;
//! store.delete_image(&old_logo).await;
//! ```

pub mod store;

// Re-export store types
pub use store::{MediaError, MediaResult, MediaStore};
