//! Axum route handlers for resume improvement and generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::improve::builder::ResumeForm;
use crate::scoring::{score, Backend, ScoreReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    /// Prior analysis; computed locally when absent.
    pub report: Option<ScoreReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub improved_text: String,
    pub backend: Backend,
}

#[derive(Debug, Deserialize)]
pub struct BuildRequest {
    pub form: ResumeForm,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResponse {
    pub resume_text: String,
    pub backend: Backend,
}

/// POST /api/v1/improve
pub async fn handle_improve(
    State(state): State<AppState>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText cannot be empty".to_string()));
    }

    let report = request
        .report
        .unwrap_or_else(|| score(&request.resume_text, &request.job_description));

    let rewrite = state
        .writer
        .improve(&request.resume_text, &request.job_description, &report)
        .await?;

    Ok(Json(ImproveResponse {
        improved_text: rewrite.text,
        backend: rewrite.backend,
    }))
}

/// POST /api/v1/build
pub async fn handle_build(
    State(state): State<AppState>,
    Json(request): Json<BuildRequest>,
) -> Result<Json<BuildResponse>, AppError> {
    if request.form.is_blank() {
        return Err(AppError::Validation("form.name cannot be empty".to_string()));
    }

    let rewrite = state.writer.build(&request.form).await?;

    Ok(Json(BuildResponse {
        resume_text: rewrite.text,
        backend: rewrite.backend,
    }))
}
