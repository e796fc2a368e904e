//! Media host collaborator.
//!
//! Maps a raw upload payload (a base64 data URI) to a durable public
//! URL. The concrete implementation talks to a Cloudinary-style unsigned
//! upload endpoint over HTTPS.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::MediaConfig;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Upload collaborator trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Upload a payload and return the durable public URL.
    async fn upload(&self, payload: &str) -> AppResult<String>;
}

/// True when the value is already an absolute http/https URL.
pub fn is_absolute_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Substitute a durable URL for a raw photo payload.
///
/// Absolute URLs pass through unchanged, raw payloads go to the media
/// host, and empty or absent input stays absent. This is the only place
/// the upload collaborator is reached from employee mutations.
pub async fn resolve_photo(
    media: &dyn MediaHost,
    photo: Option<String>,
) -> AppResult<Option<String>> {
    let Some(value) = photo else {
        return Ok(None);
    };
    if value.is_empty() {
        return Ok(None);
    }
    if is_absolute_url(&value) {
        return Ok(Some(value));
    }
    media.upload(&value).await.map(Some)
}

/// Cloudinary-backed implementation of [`MediaHost`].
pub struct CloudinaryHost {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
    folder: String,
}

impl CloudinaryHost {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                config.cloud_name
            ),
            upload_preset: config.upload_preset.clone(),
            folder: config.folder.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResult {
    secure_url: Option<String>,
}

#[async_trait]
impl MediaHost for CloudinaryHost {
    async fn upload(&self, payload: &str) -> AppResult<String> {
        let form = [
            ("file", payload),
            ("upload_preset", &self.upload_preset),
            ("folder", &self.folder),
        ];

        let response = self
            .client
            .post(&self.upload_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Media host unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::upstream(format!(
                "Media host returned {}",
                response.status()
            )));
        }

        let body: UploadResult = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("Invalid media host response: {}", e)))?;

        body.secure_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::upstream("Media host response missing secure_url"))
    }
}
