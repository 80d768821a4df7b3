//! Axum route handlers for resume scoring.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::scoring::{score, ScoreReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

impl ScoreRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() {
            return Err(AppError::Validation("resumeText cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// POST /api/v1/score
///
/// Local heuristic report. Never calls the network.
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Result<Json<ScoreReport>, AppError> {
    request.validate()?;
    Ok(Json(score(&request.resume_text, &request.job_description)))
}

/// POST /api/v1/analyze
///
/// Report from the configured analyzer: AI-first with heuristic fallback when an API key
/// is set, heuristic otherwise. `backend` in the body states which one answered.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    request.validate()?;

    let report = state
        .analyzer
        .analyze(&request.resume_text, &request.job_description)
        .await?;
    info!(
        backend = ?report.backend,
        composite = report.composite_score,
        "Resume analyzed"
    );

    Ok(Json(report))
}
