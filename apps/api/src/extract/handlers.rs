//! Axum route handler for file upload and text extraction.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{DocumentFormat, UploadExtractor};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub format: DocumentFormat,
}

/// POST /api/v1/extract
///
/// Multipart upload with a `file` field. PDF parsing runs on the blocking pool.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload: Option<(Bytes, Option<String>, Option<String>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;
        upload = Some((bytes, content_type, file_name));
        break;
    }

    let (bytes, content_type, file_name) =
        upload.ok_or_else(|| AppError::Validation("missing `file` field".to_string()))?;

    let extractor = UploadExtractor::new(state.config.max_upload_bytes());
    let (text, format) = tokio::task::spawn_blocking(move || {
        extractor.extract(&bytes, content_type.as_deref(), file_name.as_deref())
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    info!(?format, chars = text.len(), "Upload extracted");
    Ok(Json(ExtractResponse { text, format }))
}
