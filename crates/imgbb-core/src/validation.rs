//! Input validation for the upload operation.
//!
//! Every check here runs before any network I/O and fails with
//! [`ImgbbError::Validation`].

use std::path::Path;

use url::Url;

use crate::constants::{MAX_EXPIRATION, MIN_EXPIRATION, SUPPORTED_EXTENSIONS};
use crate::error::ImgbbError;

pub fn validate_api_key(key: &str) -> Result<(), ImgbbError> {
    if key.trim().is_empty() {
        return Err(ImgbbError::validation(
            "ImgBB API key is required and must be a non-empty string",
        ));
    }
    Ok(())
}

/// Expiration 0 means "never expires" and is omitted from the request;
/// anything else must fall inside the range the service accepts.
pub fn validate_expiration(expiration: u64) -> Result<(), ImgbbError> {
    if expiration == 0 {
        return Ok(());
    }
    if !(MIN_EXPIRATION..=MAX_EXPIRATION).contains(&expiration) {
        return Err(ImgbbError::validation(format!(
            "Expiration must be a number between {} and {} seconds",
            MIN_EXPIRATION, MAX_EXPIRATION
        )));
    }
    Ok(())
}

/// Extension check for inputs that carry a filename. A filename without an
/// extension passes; inputs that carry no filename never reach this check.
pub fn validate_image_type(filename: &str) -> Result<(), ImgbbError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext {
        Some(ext) if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => {
            Err(ImgbbError::validation(format!(
                "Invalid image type. Supported formats: JPEG, PNG, GIF, BMP, WEBP. Got: .{}",
                ext
            )))
        }
        _ => Ok(()),
    }
}

/// True when the string parses as an absolute URL with both a scheme and a
/// host, the shape the service accepts verbatim.
pub fn is_remote_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
