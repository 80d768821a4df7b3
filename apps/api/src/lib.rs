//! atsforge — resume structuring, heuristic ATS scoring and page layout.
//!
//! The core (`document`, `scoring`, `layout`, `catalog`) is pure and synchronous:
//! `parse(text)`, `score(resume, jd)`, `layout(doc, theme, geometry)`,
//! `ThemeCatalog::get(id)`. The remaining modules wrap it in an axum service.

pub mod catalog;
pub mod config;
pub mod document;
pub mod errors;
pub mod extract;
pub mod improve;
pub mod layout;
pub mod llm_client;
pub mod render;
pub mod routes;
pub mod scoring;
pub mod state;

pub use catalog::{KeywordCatalog, Theme, ThemeCatalog};
pub use document::{parse, ParsedDocument};
pub use layout::{layout, PageGeometry, PageLayout};
pub use scoring::{score, ScoreReport};
