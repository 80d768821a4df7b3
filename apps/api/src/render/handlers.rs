//! Axum route handler for document export.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::document::parse;
use crate::errors::AppError;
use crate::layout::layout;
use crate::render::{download_file_name, ExportFormat, RenderInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub text: String,
    pub theme_id: Option<String>,
    #[serde(default)]
    pub format: ExportFormat,
}

/// POST /api/v1/export
///
/// Parses, lays out and serializes the resume; the body is the file itself with a
/// `Content-Disposition: attachment` filename of `resume_<theme>.<ext>`.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let theme = state.theme(request.theme_id.as_deref());
    let doc = parse(&request.text);
    let page_layout = layout(&doc, theme, &state.geometry);

    let serializer = request.format.serializer();
    let bytes = serializer.render(RenderInput {
        doc: &doc,
        layout: &page_layout,
        theme,
    })?;

    let file_name = download_file_name(theme, serializer.extension());
    info!(
        theme = theme.id,
        format = ?request.format,
        bytes = bytes.len(),
        "Exported resume as {file_name}"
    );

    Ok((
        [
            (header::CONTENT_TYPE, serializer.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
