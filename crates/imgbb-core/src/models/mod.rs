//! Wire types for the upload operation.
//!
//! Field names mirror the service's JSON contract exactly; nothing is
//! renamed or dropped on the way through.

mod image;
mod upload;

// Re-export all models for convenient imports
pub use image::{ImageRecord, ImageVariant, UploadResponse};
pub use upload::UploadOptions;
