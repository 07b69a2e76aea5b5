//! ImgBB Core Library
//!
//! This crate provides the wire types, validation helpers, and error enum
//! shared by the ImgBB upload client and its front ends (CLI, example web
//! server). It has no HTTP dependency of its own.

pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use error::ImgbbError;
pub use models::{ImageRecord, ImageVariant, UploadOptions, UploadResponse};
