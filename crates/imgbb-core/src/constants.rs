//! Service-wide constants for the ImgBB upload API.

/// Upload endpoint of the hosted service.
pub const IMGBB_API_URL: &str = "https://api.imgbb.com/1/upload";

/// Fixed request timeout, in seconds.
pub const UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Largest image the service accepts, in bytes (32 MiB).
pub const MAX_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Smallest auto-deletion delay the service accepts, in seconds.
pub const MIN_EXPIRATION: u64 = 60;

/// Largest auto-deletion delay the service accepts, in seconds (180 days).
pub const MAX_EXPIRATION: u64 = 15_552_000;

/// File extensions the service stores. Inputs that carry no filename are
/// not checked against this set.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];
