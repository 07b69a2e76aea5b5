//! HTTP client for the ImgBB image hosting API.
//!
//! One core operation: [`ImgbbClient::upload`] takes an image (file path,
//! remote URL, raw bytes, or open stream), validates and encodes it, issues
//! a single POST to the upload endpoint, and returns the typed response.
//! Failures come back as [`ImgbbError`] so callers can match on the kind.
//!
//! ```no_run
//! use imgbb_client::{ImgbbClient, UploadOptions, UploadSource};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = ImgbbClient::from_env()?;
//! let response = client
//!     .upload_with_options(
//!         UploadSource::Path("photo.jpg".into()),
//!         &UploadOptions::new().name("my-photo").expiration(3600),
//!     )
//!     .await?;
//! println!("{}", response.data.url);
//! # Ok(())
//! # }
//! ```

mod source;
mod upload;

pub use imgbb_core::{ImageRecord, ImageVariant, ImgbbError, UploadOptions, UploadResponse};
pub use source::{ImageStream, UploadSource};

use std::time::Duration;

use anyhow::{Context, Result};
use imgbb_core::constants::{IMGBB_API_URL, UPLOAD_TIMEOUT_SECS};

/// Client for the ImgBB upload API.
///
/// Holds the API key and one `reqwest::Client`; cheap to clone and safe to
/// use from many tasks at once. Each upload call is fully independent.
#[derive(Clone, Debug)]
pub struct ImgbbClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
}

/// Builder for [`ImgbbClient`] with endpoint and timeout overrides.
#[derive(Debug)]
pub struct ImgbbClientBuilder {
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl ImgbbClientBuilder {
    /// Override the upload endpoint (e.g. to point at a mock server).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the fixed request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ImgbbClient> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(ImgbbClient {
            client,
            api_key: self.api_key,
            endpoint: self.endpoint,
            timeout: self.timeout,
        })
    }
}

impl ImgbbClient {
    /// Create a client with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ImgbbClientBuilder {
        ImgbbClientBuilder {
            api_key: api_key.into(),
            endpoint: IMGBB_API_URL.to_string(),
            timeout: Duration::from_secs(UPLOAD_TIMEOUT_SECS),
        }
    }

    /// Create a client from the environment: IMGBB_API_KEY, with an
    /// optional IMGBB_API_URL endpoint override.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("IMGBB_API_KEY").context("Missing API key. Set IMGBB_API_KEY")?;

        let mut builder = Self::builder(api_key);
        if let Ok(endpoint) = std::env::var("IMGBB_API_URL") {
            builder = builder.endpoint(endpoint);
        }
        builder.build()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
