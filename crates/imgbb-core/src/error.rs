//! Error types for the ImgBB upload client.
//!
//! All failures surface as one [`ImgbbError`] enum so callers can match
//! broadly or on a single kind. `Validation` is always raised before any
//! network I/O. `Timeout` stays separate from `Api` so callers can apply a
//! retry policy to timeouts alone.

/// Error returned by the upload operation.
#[derive(Debug, thiserror::Error)]
pub enum ImgbbError {
    /// Caller-supplied input is malformed: bad API key, out-of-range
    /// expiration, missing/oversized/wrong-extension file, unreadable
    /// stream. Raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// The service rejected the request, returned a non-success body, or a
    /// non-timeout transport failure occurred.
    #[error("{message}")]
    Api {
        message: String,
        /// HTTP status of the response; 0 for transport-level failures.
        status_code: u16,
        /// Raw response body; empty for transport-level failures.
        response_text: String,
    },

    /// The request exceeded the fixed upload timeout.
    #[error("Upload timed out after {seconds} seconds")]
    Timeout { seconds: u64 },
}

impl ImgbbError {
    pub fn validation(message: impl Into<String>) -> Self {
        ImgbbError::Validation(message.into())
    }

    pub fn api(message: impl Into<String>, status_code: u16, response_text: impl Into<String>) -> Self {
        ImgbbError::Api {
            message: message.into(),
            status_code,
            response_text: response_text.into(),
        }
    }

    /// HTTP status attached to the error, when the failure came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ImgbbError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Error kind name for logs and error responses.
    pub fn error_type(&self) -> &'static str {
        match self {
            ImgbbError::Validation(_) => "Validation",
            ImgbbError::Api { .. } => "Api",
            ImgbbError::Timeout { .. } => "Timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_is_message() {
        let err = ImgbbError::validation("ImgBB API key is required");
        assert_eq!(err.to_string(), "ImgBB API key is required");
        assert_eq!(err.error_type(), "Validation");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn api_carries_status_and_body() {
        let err = ImgbbError::api("ImgBB API error: HTTP 403: Invalid API key", 403, "{}");
        assert!(err.to_string().contains("403"));
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.error_type(), "Api");
        match err {
            ImgbbError::Api { response_text, .. } => assert_eq!(response_text, "{}"),
            _ => panic!("expected Api"),
        }
    }

    #[test]
    fn timeout_names_duration() {
        let err = ImgbbError::Timeout { seconds: 30 };
        assert!(err.to_string().contains("timed out"));
        assert!(err.to_string().contains("30"));
        assert_eq!(err.error_type(), "Timeout");
        assert_eq!(err.status_code(), None);
    }
}
