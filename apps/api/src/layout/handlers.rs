//! Axum route handlers for themes and page layout.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::catalog::{Theme, ThemeCatalog};
use crate::document::parse;
use crate::errors::AppError;
use crate::layout::{layout, PageGeometry, PageLayout};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    pub text: String,
    pub theme_id: Option<String>,
    pub geometry: Option<PageGeometry>,
}

/// Rejects geometry with no printable area.
pub fn validate_geometry(g: &PageGeometry) -> Result<(), AppError> {
    let values = [
        g.page_width,
        g.page_height,
        g.margin,
        g.line_height,
        g.body_reserve,
        g.section_reserve,
    ];
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(AppError::Validation(
            "geometry values must be finite and non-negative".to_string(),
        ));
    }
    if g.line_height <= 0.0
        || g.content_width() <= 0.0
        || g.body_limit() <= g.margin
        || g.section_limit() <= g.margin
    {
        return Err(AppError::Validation(
            "geometry leaves no printable area".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<&'static [Theme]> {
    Json(ThemeCatalog::all())
}

/// POST /api/v1/layout
///
/// Parses the text and lays it out on pages. Unknown theme ids use the default theme.
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Result<Json<PageLayout>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let geometry = request.geometry.unwrap_or(state.geometry);
    validate_geometry(&geometry)?;

    let theme = state.theme(request.theme_id.as_deref());
    let doc = parse(&request.text);
    let page_layout = layout(&doc, theme, &geometry);

    info!(
        theme = theme.id,
        primary = %theme.primary_color.to_hex(),
        pages = page_layout.page_count(),
        "Layout complete"
    );
    Ok(Json(page_layout))
}
