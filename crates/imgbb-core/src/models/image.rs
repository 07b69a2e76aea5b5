use serde::{Deserialize, Deserializer, Serialize};

/// One rendered form of a stored image (original, thumbnail, or medium),
/// with its own URL and MIME metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub filename: String,
    pub name: String,
    pub mime: String,
    pub extension: String,
    pub url: String,
}

/// Full metadata the service returns for a stored image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub title: String,
    pub url_viewer: String,
    pub url: String,
    pub display_url: String,
    #[serde(deserialize_with = "u64_from_number_or_string")]
    pub width: u64,
    #[serde(deserialize_with = "u64_from_number_or_string")]
    pub height: u64,
    #[serde(deserialize_with = "u64_from_number_or_string")]
    pub size: u64,
    /// Upload timestamp (unix seconds).
    #[serde(deserialize_with = "u64_from_number_or_string")]
    pub time: u64,
    /// Auto-deletion delay in seconds, 0 when stored permanently.
    #[serde(deserialize_with = "u64_from_number_or_string")]
    pub expiration: u64,
    pub image: ImageVariant,
    pub thumb: ImageVariant,
    pub medium: ImageVariant,
    pub delete_url: String,
}

/// Successful response envelope: `{ data, success, status }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub data: ImageRecord,
    pub success: bool,
    pub status: u16,
}

/// The service returns numeric fields either as JSON numbers or as quoted
/// strings depending on response age; accept both.
fn u64_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| Error::custom("expected an unsigned integer")),
        serde_json::Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| Error::custom(format!("expected an integer string, got {s:?}"))),
        other => Err(Error::custom(format!(
            "expected a number or string, got {other}"
        ))),
    }
}
