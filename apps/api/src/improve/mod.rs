//! Resume rewriting and generation.
//!
//! `ResumeWriter` has the same three shapes as the analyzers: a local template writer
//! that never fails, a Claude-backed writer, and an AI-first writer that degrades to the
//! local one. The local rewrite only swaps weak phrasings for strong verbs.

pub mod builder;
pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use regex::Captures;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::KeywordCatalog;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::scoring::{Backend, ScoreReport};

use builder::{build_from_template, ResumeForm};
use prompts::{build_generate_prompt, build_improve_prompt, WRITER_SYSTEM};

// ────────────────────────────────────────────────────────────────────────────
// Local rewrite
// ────────────────────────────────────────────────────────────────────────────

/// Replaces every weak phrasing with its strong verb, on word boundaries and
/// case-insensitively. A capitalised match gets a capitalised replacement.
pub fn strengthen_verbs(text: &str, catalog: &KeywordCatalog) -> String {
    catalog
        .weak_phrases()
        .iter()
        .fold(text.to_string(), |acc, phrase| {
            phrase
                .pattern
                .replace_all(&acc, |caps: &Captures| {
                    match_case(&caps[0], phrase.replacement)
                })
                .into_owned()
        })
}

fn match_case(matched: &str, replacement: &str) -> String {
    let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Writer trait
// ────────────────────────────────────────────────────────────────────────────

/// Resume text plus the backend that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    pub text: String,
    pub backend: Backend,
}

impl Rewrite {
    fn heuristic(text: String) -> Self {
        Self {
            text,
            backend: Backend::Heuristic,
        }
    }
}

#[async_trait]
pub trait ResumeWriter: Send + Sync {
    fn backend(&self) -> Backend;

    async fn improve(
        &self,
        resume: &str,
        job_description: &str,
        report: &ScoreReport,
    ) -> Result<Rewrite, AppError>;

    async fn build(&self, form: &ResumeForm) -> Result<Rewrite, AppError>;
}

/// Local writer: verb strengthening and template assembly. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateWriter;

#[async_trait]
impl ResumeWriter for TemplateWriter {
    fn backend(&self) -> Backend {
        Backend::Heuristic
    }

    async fn improve(&self, resume: &str, _: &str, _: &ScoreReport) -> Result<Rewrite, AppError> {
        Ok(Rewrite::heuristic(strengthen_verbs(resume, KeywordCatalog::builtin())))
    }

    async fn build(&self, form: &ResumeForm) -> Result<Rewrite, AppError> {
        Ok(Rewrite::heuristic(build_from_template(form)))
    }
}

/// Claude-backed writer.
#[derive(Debug, Clone)]
pub struct LlmWriter(pub LlmClient);

#[async_trait]
impl ResumeWriter for LlmWriter {
    fn backend(&self) -> Backend {
        Backend::Llm
    }

    async fn improve(
        &self,
        resume: &str,
        job_description: &str,
        report: &ScoreReport,
    ) -> Result<Rewrite, AppError> {
        let prompt = build_improve_prompt(resume, job_description, report);
        let text = self.0.call_text(&prompt, WRITER_SYSTEM).await?;
        info!(chars = text.len(), "LLM rewrite complete");
        Ok(Rewrite {
            text,
            backend: Backend::Llm,
        })
    }

    async fn build(&self, form: &ResumeForm) -> Result<Rewrite, AppError> {
        let prompt = build_generate_prompt(form).map_err(|e| AppError::Internal(e.into()))?;
        let text = self.0.call_text(&prompt, WRITER_SYSTEM).await?;
        info!(chars = text.len(), "LLM resume generation complete");
        Ok(Rewrite {
            text,
            backend: Backend::Llm,
        })
    }
}

/// Tries `primary`; on error logs a warning and answers with the template writer.
pub struct FallbackWriter {
    primary: Arc<dyn ResumeWriter>,
    fallback: TemplateWriter,
}

impl FallbackWriter {
    pub fn new(primary: Arc<dyn ResumeWriter>) -> Self {
        Self {
            primary,
            fallback: TemplateWriter,
        }
    }
}

#[async_trait]
impl ResumeWriter for FallbackWriter {
    fn backend(&self) -> Backend {
        self.primary.backend()
    }

    async fn improve(
        &self,
        resume: &str,
        job_description: &str,
        report: &ScoreReport,
    ) -> Result<Rewrite, AppError> {
        match self.primary.improve(resume, job_description, report).await {
            Ok(rewrite) => Ok(rewrite),
            Err(e) => {
                warn!("Primary writer failed to improve, using local rewrite: {e}");
                self.fallback.improve(resume, job_description, report).await
            }
        }
    }

    async fn build(&self, form: &ResumeForm) -> Result<Rewrite, AppError> {
        match self.primary.build(form).await {
            Ok(rewrite) => Ok(rewrite),
            Err(e) => {
                warn!("Primary writer failed to build, using template: {e}");
                self.fallback.build(form).await
            }
        }
    }
}

/// Template-only when no client is configured, otherwise AI-first with fallback.
pub fn select_writer(llm: Option<LlmClient>) -> Arc<dyn ResumeWriter> {
    match llm {
        Some(client) => Arc::new(FallbackWriter::new(Arc::new(LlmWriter(client)))),
        None => Arc::new(TemplateWriter),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
