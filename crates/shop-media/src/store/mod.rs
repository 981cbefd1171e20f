//! Media storage module.
//!
//! Filesystem-backed storage for uploaded images with extension
//! allow-listing, generated filenames, and in-place resizing.

mod media_store;

pub use media_store::{MediaError, MediaResult, MediaStore};
