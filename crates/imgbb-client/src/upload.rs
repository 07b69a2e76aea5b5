//! The upload operation: normalize the input, issue one POST, interpret
//! the response.
//!
//! The flow is strictly linear per call: validate, normalize, build the
//! request, send it, interpret the result. No stage is re-entered and no
//! state survives the call.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use imgbb_core::constants::MAX_FILE_SIZE;
use imgbb_core::validation::{
    is_remote_url, validate_api_key, validate_expiration, validate_image_type,
};
use imgbb_core::{ImgbbError, UploadOptions, UploadResponse};

use crate::source::{ImageStream, StreamReader, UploadSource};
use crate::ImgbbClient;

/// Normalized request payload: the `image` form field value (a URL
/// forwarded verbatim or base64 image data) plus the source filename, kept
/// for the `name` fallback.
#[derive(Debug)]
struct ImagePayload {
    image: String,
    filename: Option<String>,
}

fn read_image_file(path: &Path, filename: Option<&str>) -> Result<Vec<u8>, ImgbbError> {
    if !path.exists() {
        return Err(ImgbbError::validation(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let metadata = std::fs::metadata(path).map_err(|e| {
        ImgbbError::validation(format!("Failed to read metadata for {}: {}", path.display(), e))
    })?;

    if !metadata.is_file() {
        return Err(ImgbbError::validation(format!(
            "Path is not a file: {}",
            path.display()
        )));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(ImgbbError::validation(format!(
            "File size ({} bytes) exceeds maximum allowed size ({} bytes)",
            metadata.len(),
            MAX_FILE_SIZE
        )));
    }

    if let Some(filename) = filename {
        validate_image_type(filename)?;
    }

    std::fs::read(path).map_err(|e| {
        ImgbbError::validation(format!("Failed to read file {}: {}", path.display(), e))
    })
}

/// Drain a stream into memory. Seekable streams get their read position
/// restored so the caller's handle stays usable afterwards.
fn consume_stream(reader: StreamReader<'_>) -> Result<Vec<u8>, ImgbbError> {
    let mut buffer = Vec::new();
    match reader {
        StreamReader::Plain(mut reader) => {
            reader
                .read_to_end(&mut buffer)
                .map_err(|e| ImgbbError::validation(format!("Failed to read image stream: {e}")))?;
        }
        StreamReader::Seekable(mut reader) => {
            let start = reader.stream_position().map_err(|e| {
                ImgbbError::validation(format!("Failed to read stream position: {e}"))
            })?;
            reader
                .read_to_end(&mut buffer)
                .map_err(|e| ImgbbError::validation(format!("Failed to read image stream: {e}")))?;
            reader.seek(SeekFrom::Start(start)).map_err(|e| {
                ImgbbError::validation(format!("Failed to restore stream position: {e}"))
            })?;
        }
    }
    Ok(buffer)
}

/// Turn an [`UploadSource`] into the wire payload. URLs pass through
/// verbatim; everything else is validated and base64-encoded.
fn normalize(source: UploadSource<'_>) -> Result<ImagePayload, ImgbbError> {
    match source {
        UploadSource::Url(url) => {
            if !is_remote_url(&url) {
                return Err(ImgbbError::validation(format!(
                    "Not a valid absolute URL: {url}"
                )));
            }
            Ok(ImagePayload {
                image: url,
                filename: None,
            })
        }
        UploadSource::Path(path) => {
            let filename = path.file_name().map(|n| n.to_string_lossy().into_owned());
            let bytes = read_image_file(&path, filename.as_deref())?;
            Ok(ImagePayload {
                image: BASE64.encode(bytes),
                filename,
            })
        }
        UploadSource::Bytes(bytes) => Ok(ImagePayload {
            image: BASE64.encode(bytes),
            filename: None,
        }),
        UploadSource::Stream(ImageStream { reader, name }) => {
            // check the name before draining so a rejected stream is left untouched
            if let Some(name) = &name {
                validate_image_type(name)?;
            }
            let bytes = consume_stream(reader)?;
            Ok(ImagePayload {
                image: BASE64.encode(bytes),
                filename: name,
            })
        }
    }
}

/// Filename without its extension, used when the caller gave no explicit name.
fn name_from_filename(filename: &str) -> Option<String> {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

fn interpret_response(status: u16, body: String) -> Result<UploadResponse, ImgbbError> {
    if status != 200 {
        let mut message = format!("ImgBB API error: HTTP {status}");
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => {
                if let Some(error) = value.get("error") {
                    let detail = error
                        .get("message")
                        .and_then(|m| m.as_str())
                        .unwrap_or("Unknown error");
                    message.push_str(&format!(": {detail}"));
                }
            }
            Err(_) => message.push_str(&format!(": {body}")),
        }
        return Err(ImgbbError::api(message, status, body));
    }

    let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
        ImgbbError::api(
            format!("Failed to parse ImgBB response: {e}"),
            status,
            body.clone(),
        )
    })?;

    if !value
        .get("success")
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
    {
        let detail = value
            .pointer("/error/message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        return Err(ImgbbError::api(
            format!("Upload failed: {detail}"),
            status,
            body,
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        ImgbbError::api(
            format!("Failed to parse ImgBB response: {e}"),
            status,
            body,
        )
    })
}

impl ImgbbClient {
    /// Upload an image with default options (no custom name, permanent
    /// storage).
    pub async fn upload(&self, image: UploadSource<'_>) -> Result<UploadResponse, ImgbbError> {
        self.upload_with_options(image, &UploadOptions::default())
            .await
    }

    /// Upload an image to the service.
    ///
    /// Validates the inputs, normalizes the image into the wire payload,
    /// issues exactly one POST to the upload endpoint, and maps the result
    /// into a typed [`UploadResponse`] or an [`ImgbbError`]. Validation
    /// failures never touch the network. Dropping the returned future
    /// aborts the in-flight request.
    pub async fn upload_with_options(
        &self,
        image: UploadSource<'_>,
        options: &UploadOptions,
    ) -> Result<UploadResponse, ImgbbError> {
        validate_api_key(&self.api_key)?;
        validate_expiration(options.expiration)?;

        let payload = normalize(image)?;

        let mut params: Vec<(&str, String)> = vec![("key", self.api_key.clone())];
        if options.expiration != 0 {
            params.push(("expiration", options.expiration.to_string()));
        }

        let mut form: Vec<(&str, String)> = vec![("image", payload.image)];
        let name = options
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| payload.filename.as_deref().and_then(name_from_filename));
        if let Some(name) = name {
            form.push(("name", name));
        }

        tracing::debug!(endpoint = %self.endpoint, "uploading image to ImgBB");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&params)
            .form(&form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(status, "ImgBB responded");

        interpret_response(status, body)
    }

    fn transport_error(&self, err: reqwest::Error) -> ImgbbError {
        if err.is_timeout() {
            ImgbbError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            ImgbbError::api(format!("Network error: {err}"), 0, String::new())
        }
    }
}
