//! Axum route handlers for document parsing.

use axum::Json;
use serde::Deserialize;

use crate::document::{parse, ParsedDocument};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// POST /api/v1/parse
///
/// Splits raw resume text into header lines and named sections.
pub async fn handle_parse(Json(request): Json<ParseRequest>) -> Result<Json<ParsedDocument>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(parse(&request.text)))
}
