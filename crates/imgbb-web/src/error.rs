//! HTTP error mapping for the example server.
//!
//! Each error kind gets its own status: validation failures are the
//! caller's fault (400), timeouts and upstream rejections are gateway
//! problems (504/502).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use imgbb_client::ImgbbError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Wrapper so handler errors render as a consistent JSON body.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ErrorResponse,
}

impl HttpError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: message.into(),
                error_type: "Validation".to_string(),
                status_code: None,
            },
        }
    }
}

impl From<ImgbbError> for HttpError {
    fn from(err: ImgbbError) -> Self {
        let status = match &err {
            ImgbbError::Validation(_) => StatusCode::BAD_REQUEST,
            ImgbbError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            ImgbbError::Api { .. } => StatusCode::BAD_GATEWAY,
        };
        HttpError {
            status,
            body: ErrorResponse {
                error: err.to_string(),
                error_type: err.error_type().to_string(),
                status_code: err.status_code(),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
