//! File upload handler.
//!
//! Accepts a single multipart file field, forwards it to the media host
//! as a base64 data URI, and returns the durable URL.

use axum::{
    extract::{Multipart, State},
    Json,
};
use base64::Engine;
use serde::Serialize;

use crate::api::AppState;
use crate::errors::{AppError, AppResult, FieldError};

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

/// Handle `POST /upload`. The first non-empty field wins; requests with
/// no file at all are rejected with a 400 envelope.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let data = field.bytes().await.map_err(bad_multipart)?;
        if data.is_empty() {
            continue;
        }

        let payload = format!(
            "data:{};base64,{}",
            content_type,
            base64::engine::general_purpose::STANDARD.encode(&data)
        );

        let url = state.media.upload(&payload).await?;
        tracing::debug!(bytes = data.len(), "file uploaded to media host");
        return Ok(Json(UploadResponse { success: true, url }));
    }

    Err(AppError::validation(vec![FieldError::new(
        "file",
        "file is required",
    )]))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::validation(vec![FieldError::new("file", err.to_string())])
}
