//! Resume analyzers — pluggable producers of a `ScoreReport`.
//!
//! `HeuristicAnalyzer` is local and always succeeds. `LlmAnalyzer` asks Claude and
//! normalises the answer into the same contract. `FallbackAnalyzer` tries a primary
//! analyzer and degrades to the heuristic one on any failure.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` chosen at startup from config.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;

use super::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use super::report::{clamp_score, Backend, ScoreReport, SubScores};
use super::HeuristicScorer;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// Backend that produces reports when this analyzer succeeds.
    fn backend(&self) -> Backend;

    async fn analyze(&self, resume: &str, job_description: &str) -> Result<ScoreReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Local keyword/heuristic analyzer over the builtin catalog. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    fn backend(&self) -> Backend {
        Backend::Heuristic
    }

    async fn analyze(&self, resume: &str, job_description: &str) -> Result<ScoreReport, AppError> {
        Ok(HeuristicScorer::default().composite_report(resume, job_description))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Analysis as returned by the model. Numbers may be fractional or out of range.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawAnalysis {
    #[serde(alias = "subScores")]
    scores: RawSubScores,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    suggested_skills: Vec<String>,
    formatting_issues: Vec<String>,
    recommendations: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSubScores {
    keyword_match: f64,
    #[serde(alias = "formattingCompliance")]
    formatting: f64,
    readability: f64,
    completeness: f64,
    action_verbs: f64,
}

impl RawAnalysis {
    /// Clamps every sub-score and derives the composite with the standard weights,
    /// ignoring whatever composite the model reported.
    fn into_report(self) -> ScoreReport {
        let s = self.scores;
        let sub_scores = SubScores {
            keyword_match: clamp_score(s.keyword_match),
            formatting: clamp_score(s.formatting),
            readability: clamp_score(s.readability),
            completeness: clamp_score(s.completeness),
            action_verbs: clamp_score(s.action_verbs),
        };

        let mut report = ScoreReport::new(sub_scores, Backend::Llm);
        report.matched_skills = clean_set(self.matched_skills);
        report.missing_skills = clean_set(self.missing_skills);
        report.suggested_skills = clean_set(self.suggested_skills);
        report.formatting_issues = clean_list(self.formatting_issues);
        report.recommendations = clean_list(self.recommendations);
        report
    }
}

fn clean_set(items: Vec<String>) -> BTreeSet<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Semantic analyzer via Claude.
#[derive(Debug, Clone)]
pub struct LlmAnalyzer(pub LlmClient);

#[async_trait]
impl ResumeAnalyzer for LlmAnalyzer {
    fn backend(&self) -> Backend {
        Backend::Llm
    }

    async fn analyze(&self, resume: &str, job_description: &str) -> Result<ScoreReport, AppError> {
        let prompt = build_analysis_prompt(resume, job_description);
        let raw: RawAnalysis = self.0.call_json(&prompt, ANALYSIS_SYSTEM).await?;
        let report = raw.into_report();
        info!(composite = report.composite_score, "LLM analysis complete");
        Ok(report)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Tries `primary`; on error logs a warning and answers with the heuristic analyzer.
pub struct FallbackAnalyzer {
    primary: Arc<dyn ResumeAnalyzer>,
    fallback: HeuristicAnalyzer,
}

impl FallbackAnalyzer {
    pub fn new(primary: Arc<dyn ResumeAnalyzer>) -> Self {
        Self {
            primary,
            fallback: HeuristicAnalyzer,
        }
    }
}

#[async_trait]
impl ResumeAnalyzer for FallbackAnalyzer {
    fn backend(&self) -> Backend {
        self.primary.backend()
    }

    async fn analyze(&self, resume: &str, job_description: &str) -> Result<ScoreReport, AppError> {
        match self.primary.analyze(resume, job_description).await {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!("Primary analyzer failed, falling back to heuristic scoring: {e}");
                self.fallback.analyze(resume, job_description).await
            }
        }
    }
}

/// Heuristic-only when no client is configured, otherwise AI-first with fallback.
pub fn select_analyzer(llm: Option<LlmClient>) -> Arc<dyn ResumeAnalyzer> {
    match llm {
        Some(client) => Arc::new(FallbackAnalyzer::new(Arc::new(LlmAnalyzer(client)))),
        None => Arc::new(HeuristicAnalyzer),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
