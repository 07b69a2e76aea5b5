//! Example web front end for the ImgBB client.
//!
//! Serves a minimal upload form and a `POST /upload` endpoint that accepts
//! a multipart form (`file`, optional `name` and `expiration`) and forwards
//! it to the upload operation. All upload semantics live in the client; this
//! server only translates multipart in and JSON out.

mod error;

use std::io::Cursor;

use anyhow::Context;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use imgbb_client::{ImageStream, ImgbbClient, UploadOptions, UploadResponse, UploadSource};

use crate::error::HttpError;

#[derive(Clone)]
struct AppState {
    client: ImgbbClient,
}

const UPLOAD_FORM: &str = r#"<!doctype html>
<html>
<head><title>ImgBB Upload</title></head>
<body>
  <h1>ImgBB Upload</h1>
  <form action="/upload" method="post" enctype="multipart/form-data">
    <input type="file" name="file" accept="image/*" required>
    <br><br>
    <input type="text" name="name" placeholder="Custom name (optional)">
    <br><br>
    <label>
      Auto-delete:
      <select name="expiration">
        <option value="0">Never</option>
        <option value="3600">1 hour</option>
        <option value="86400">1 day</option>
      </select>
    </label>
    <br><br>
    <button type="submit">Upload</button>
  </form>
</body>
</html>
"#;

async fn index() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpError> {
    let mut file: Option<(Vec<u8>, Option<String>)> = None;
    let mut name: Option<String> = None;
    let mut expiration: u64 = 0;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::bad_request(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| HttpError::bad_request(format!("Failed to read file field: {e}")))?;
                file = Some((data.to_vec(), filename));
            }
            Some("name") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| HttpError::bad_request(format!("Failed to read name field: {e}")))?;
                if !value.is_empty() {
                    name = Some(value);
                }
            }
            Some("expiration") => {
                let value = field.text().await.map_err(|e| {
                    HttpError::bad_request(format!("Failed to read expiration field: {e}"))
                })?;
                expiration = value
                    .parse()
                    .map_err(|_| HttpError::bad_request("Expiration must be an integer"))?;
            }
            _ => {}
        }
    }

    let (data, filename) = file.ok_or_else(|| HttpError::bad_request("Missing file field"))?;

    // carry the browser filename through so the extension check applies
    let source = match filename {
        Some(filename) => {
            UploadSource::Stream(ImageStream::new(Cursor::new(data)).with_name(filename))
        }
        None => UploadSource::Bytes(data),
    };

    let options = UploadOptions { name, expiration };
    let response = state.client.upload_with_options(source, &options).await?;
    Ok(Json(response))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    dotenvy::dotenv().ok();

    let client =
        ImgbbClient::from_env().context("Failed to create ImgBB client. Set IMGBB_API_KEY")?;

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/upload", post(upload))
        .with_state(AppState { client });

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
