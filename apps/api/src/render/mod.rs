//! Document serializers: turn a laid-out resume into downloadable bytes.
//!
//! PDF and plain text follow the page layout, Markdown follows the parsed outline, JSON
//! is the raw `PageLayout`.

pub mod handlers;
pub mod pdf;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Theme;
use crate::document::ParsedDocument;
use crate::layout::{Page, PageLayout};

pub use pdf::PdfSerializer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Everything a serializer may draw from.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub doc: &'a ParsedDocument,
    pub layout: &'a PageLayout,
    pub theme: &'a Theme,
}

pub trait DocumentSerializer: Send + Sync {
    fn content_type(&self) -> &'static str;
    fn extension(&self) -> &'static str;
    fn render(&self, input: RenderInput<'_>) -> Result<Vec<u8>, RenderError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Plain text
// ────────────────────────────────────────────────────────────────────────────

const PAGE_BREAK: &str = "\u{000C}";

pub struct PlainTextSerializer;

impl PlainTextSerializer {
    /// Runs sharing a baseline (bullet marker + text) become one line.
    fn page_text(page: &Page) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut last_y: Option<f32> = None;
        for run in &page.runs {
            match lines.last_mut() {
                Some(line) if last_y == Some(run.y) => {
                    line.push(' ');
                    line.push_str(&run.text);
                }
                _ => lines.push(run.text.clone()),
            }
            last_y = Some(run.y);
        }
        lines.join("\n")
    }
}

impl DocumentSerializer for PlainTextSerializer {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, input: RenderInput<'_>) -> Result<Vec<u8>, RenderError> {
        let pages: Vec<String> = input.layout.pages.iter().map(Self::page_text).collect();
        let mut text = pages.join(&format!("\n{PAGE_BREAK}\n"));
        text.push('\n');
        Ok(text.into_bytes())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Markdown
// ────────────────────────────────────────────────────────────────────────────

pub struct MarkdownSerializer;

impl DocumentSerializer for MarkdownSerializer {
    fn content_type(&self) -> &'static str {
        "text/markdown; charset=utf-8"
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, input: RenderInput<'_>) -> Result<Vec<u8>, RenderError> {
        let doc = input.doc;
        let mut blocks: Vec<String> = Vec::new();

        if let Some((name, rest)) = doc.header_lines.split_first() {
            let mut header = format!("# {name}");
            for line in rest {
                header.push_str("\n\n");
                header.push_str(line.as_str());
            }
            blocks.push(header);
        }

        for section in &doc.sections {
            let mut block = format!("## {}", section.title);
            if !section.lines.is_empty() {
                block.push('\n');
            }
            for line in &section.lines {
                block.push('\n');
                let text = line.as_str();
                if let Some(item) = text.strip_prefix(['•', '-', '*']) {
                    block.push_str("- ");
                    block.push_str(item.trim_start());
                } else {
                    block.push_str(text);
                    // Markdown hard line break keeps consecutive lines apart.
                    block.push_str("  ");
                }
            }
            blocks.push(block);
        }

        let mut markdown = blocks.join("\n\n");
        markdown.push('\n');
        Ok(markdown.into_bytes())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON layout
// ────────────────────────────────────────────────────────────────────────────

pub struct JsonLayoutSerializer;

impl DocumentSerializer for JsonLayoutSerializer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, input: RenderInput<'_>) -> Result<Vec<u8>, RenderError> {
        Ok(serde_json::to_vec_pretty(input.layout)?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Format selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn serializer(self) -> &'static dyn DocumentSerializer {
        match self {
            ExportFormat::Text => &PlainTextSerializer,
            ExportFormat::Markdown => &MarkdownSerializer,
            ExportFormat::Json => &JsonLayoutSerializer,
            ExportFormat::Pdf => &PdfSerializer,
        }
    }
}

/// `resume_<theme name in snake case>.<ext>`
pub fn download_file_name(theme: &Theme, extension: &str) -> String {
    let theme_part = theme
        .name
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("resume_{theme_part}.{extension}")
}
