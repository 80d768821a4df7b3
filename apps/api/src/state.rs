use std::sync::Arc;

use anyhow::Result;

use crate::catalog::{Theme, ThemeCatalog};
use crate::config::Config;
use crate::improve::{select_writer, ResumeWriter};
use crate::layout::PageGeometry;
use crate::llm_client::LlmClient;
use crate::scoring::analyzer::select_analyzer;
use crate::scoring::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no API key is configured.
    pub llm: Option<LlmClient>,
    /// Heuristic, or AI-first with heuristic fallback.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// Resume rewriter/builder, same selection as the analyzer.
    pub writer: Arc<dyn ResumeWriter>,
    /// Page geometry used when a request does not supply its own.
    pub geometry: PageGeometry,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let llm = config
            .anthropic_api_key
            .clone()
            .map(LlmClient::new)
            .transpose()?;

        Ok(Self {
            analyzer: select_analyzer(llm.clone()),
            writer: select_writer(llm.clone()),
            llm,
            config,
            geometry: PageGeometry::default(),
        })
    }

    /// Theme for an optional request id, falling back to the configured default.
    pub fn theme(&self, id: Option<&str>) -> &'static Theme {
        id.and_then(ThemeCatalog::find)
            .unwrap_or_else(|| ThemeCatalog::get(&self.config.default_theme))
    }
}
