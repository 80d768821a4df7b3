//! Resume scoring — deterministic heuristic sub-scores, the weighted composite report,
//! and the pluggable analyzers (heuristic, AI-backed, AI-first-with-fallback).
//!
//! Everything outside `analyzer` and `handlers` is pure and synchronous.

pub mod analyzer;
pub mod formatting;
pub mod handlers;
pub mod keyword_match;
pub mod prompts;
pub mod readability;
pub mod report;
pub mod structure;

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{KeywordCatalog, SkillCategory};
use crate::document::{parse, ParsedDocument};

pub use analyzer::{FallbackAnalyzer, HeuristicAnalyzer, LlmAnalyzer, ResumeAnalyzer};
pub use formatting::FormattingReport;
pub use keyword_match::JobMatch;
pub use report::{composite_score, Backend, ScoreReport, SubScores};

const MAX_SUGGESTED_SKILLS: usize = 3;
const MAX_LISTED_MISSING: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// HeuristicScorer
// ────────────────────────────────────────────────────────────────────────────

/// Local, network-free scorer over a keyword catalog.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicScorer<'a> {
    catalog: &'a KeywordCatalog,
}

impl Default for HeuristicScorer<'static> {
    fn default() -> Self {
        Self::new(KeywordCatalog::builtin())
    }
}

impl<'a> HeuristicScorer<'a> {
    pub fn new(catalog: &'a KeywordCatalog) -> Self {
        Self { catalog }
    }

    pub fn extract_keywords(&self, text: &str) -> BTreeSet<String> {
        keyword_match::extract_keywords(text, self.catalog)
    }

    pub fn readability(&self, text: &str) -> u32 {
        readability::readability(text)
    }

    pub fn formatting_compliance(&self, text: &str) -> FormattingReport {
        formatting::formatting_compliance(text, self.catalog)
    }

    pub fn match_against_job_description(&self, resume: &str, job_description: &str) -> JobMatch {
        keyword_match::match_against_job_description(resume, job_description, self.catalog)
    }

    /// Full report for `resume` against `job_description`. Total over all inputs.
    pub fn composite_report(&self, resume: &str, job_description: &str) -> ScoreReport {
        let doc = parse(resume);
        self.report_for(&doc, resume, job_description)
    }

    /// As `composite_report`, reusing an already parsed document of `resume`.
    pub fn report_for(&self, doc: &ParsedDocument, resume: &str, job_description: &str) -> ScoreReport {
        let resume_keywords = self.extract_keywords(resume);
        let job_match = self.match_against_job_description(resume, job_description);
        let formatting = self.formatting_compliance(resume);

        let sub_scores = SubScores {
            keyword_match: keyword_match::keyword_match_score(&job_match, resume_keywords.len()),
            formatting: formatting.score,
            readability: self.readability(resume),
            completeness: structure::completeness(doc),
            action_verbs: structure::action_verb_strength(doc, self.catalog),
        };

        let suggested_skills = self.suggested_skills(&resume_keywords);
        let recommendations = recommendations(doc, &sub_scores, &job_match);

        let mut report = ScoreReport::new(sub_scores, Backend::Heuristic);
        report.matched_skills = job_match.matched;
        report.missing_skills = job_match.missing;
        report.suggested_skills = suggested_skills;
        report.formatting_issues = formatting.issues;
        report.recommendations = recommendations;

        debug!(
            composite = report.composite_score,
            matched = report.matched_skills.len(),
            missing = report.missing_skills.len(),
            "Heuristic score computed"
        );
        report
    }

    /// Catalog soft skills the resume does not mention, first three in catalog order.
    fn suggested_skills(&self, resume_keywords: &BTreeSet<String>) -> BTreeSet<String> {
        self.catalog
            .literals_in(SkillCategory::SoftSkill)
            .filter(|skill| !resume_keywords.contains(*skill))
            .take(MAX_SUGGESTED_SKILLS)
            .map(str::to_string)
            .collect()
    }
}

/// Scores `resume` against `job_description` with the builtin catalog.
pub fn score(resume: &str, job_description: &str) -> ScoreReport {
    HeuristicScorer::default().composite_report(resume, job_description)
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────────────

fn recommendations(doc: &ParsedDocument, scores: &SubScores, job_match: &JobMatch) -> Vec<String> {
    let mut out = Vec::new();

    if !job_match.missing.is_empty() {
        let listed: Vec<&str> = job_match
            .missing
            .iter()
            .take(MAX_LISTED_MISSING)
            .map(String::as_str)
            .collect();
        out.push(format!(
            "Include missing skills from the job description: {}",
            listed.join(", ")
        ));
    }
    if scores.keyword_match < 60 {
        out.push("Mirror the job description's terminology so ATS keyword scans match".to_string());
    }

    if !structure::has_contact_header(doc) {
        out.push("Add an email address and phone number below your name".to_string());
    }
    let sections = [
        (structure::SUMMARY_TITLES, "Add a professional summary section"),
        (structure::EXPERIENCE_TITLES, "Add an experience section"),
        (structure::EDUCATION_TITLES, "Add an education section"),
        (structure::SKILLS_TITLES, "Add a skills section"),
    ];
    for (titles, advice) in sections {
        if !doc.has_section(titles) {
            out.push(advice.to_string());
        }
    }

    if scores.action_verbs < 60 {
        out.push("Start bullet points with strong action verbs such as Led, Built or Delivered".to_string());
    }
    if scores.readability < 40 {
        out.push("Shorten long sentences to improve readability".to_string());
    }
    if scores.formatting < 80 {
        out.push("Resolve the listed formatting issues to keep the resume ATS-friendly".to_string());
    }

    if out.is_empty() {
        out.push("Add specific metrics to achievements".to_string());
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        Backend Engineer\n\
        jane@example.com | 555-123-4567 | Berlin\n\
        --- PROFESSIONAL SUMMARY ---\n\
        Engineer focused on reliable systems. I like simple code.\n\
        --- TECHNICAL SKILLS ---\n\
        Rust, Python, PostgreSQL, Docker, Leadership\n\
        --- EXPERIENCE ---\n\
        Senior Engineer | Acme | 2019 - Present\n\
        • Led the payments platform team\n\
        • Built a ledger service in Rust\n\
        --- EDUCATION ---\n\
        B.S. Computer Science | State University | 2015";

    const JD: &str = "Looking for a Rust engineer with Kubernetes, Docker and PostgreSQL.";

    #[test]
    fn test_report_shape_and_bounds() {
        let report = score(RESUME, JD);
        assert_eq!(report.backend, Backend::Heuristic);
        assert_eq!(report.composite_score, composite_score(&report.sub_scores));
        assert!(report.composite_score <= 100);

        assert_eq!(
            report.matched_skills,
            BTreeSet::from([
                "Docker".to_string(),
                "PostgreSQL".to_string(),
                "Rust".to_string(),
            ])
        );
        assert_eq!(report.missing_skills, BTreeSet::from(["Kubernetes".to_string()]));
        assert_eq!(report.sub_scores.keyword_match, 75);
        assert_eq!(report.sub_scores.completeness, 100);
        assert_eq!(report.sub_scores.formatting, 100);
        assert_eq!(report.sub_scores.action_verbs, 100);
    }

    #[test]
    fn test_suggested_skills_skip_present_soft_skills() {
        let report = score(RESUME, JD);
        assert_eq!(
            report.suggested_skills,
            BTreeSet::from([
                "Communication".to_string(),
                "Problem Solving".to_string(),
                "Teamwork".to_string(),
            ])
        );
    }

    #[test]
    fn test_recommendations_name_missing_skills() {
        let report = score(RESUME, JD);
        assert_eq!(
            report.recommendations[0],
            "Include missing skills from the job description: Kubernetes"
        );
    }

    #[test]
    fn test_score_is_total_on_degenerate_input() {
        let keyword_soup = "Rust Go Python Java Kubernetes Docker AWS GCP SQL React Terraform Git";
        let weak_only = "EXPERIENCE\n- Responsible for x\n- Did y\n- Made z\n- Handled w worked on v";
        let cases = [
            ("", ""),
            ("   ", "\n\n"),
            ("@@@ ---", "???"),
            ("ÄÖÜ 🚀", ""),
            ("Go. Do. Be.", ""),
            (keyword_soup, ""),
            (weak_only, "Rust"),
            ("- Led\n* Built\n• Shipped\n1. Designed", keyword_soup),
        ];
        for (resume, jd) in cases {
            let report = score(resume, jd);
            let s = &report.sub_scores;
            for (name, value) in [
                ("keyword_match", s.keyword_match),
                ("formatting", s.formatting),
                ("readability", s.readability),
                ("completeness", s.completeness),
                ("action_verbs", s.action_verbs),
            ] {
                assert!(value <= 100, "{name} = {value} for {resume:?}");
            }
            assert!(report.composite_score <= 100);
            assert_eq!(report.composite_score, composite_score(&report.sub_scores));
        }
        let empty = score("", "");
        assert_eq!(empty.sub_scores.readability, 0);
        assert_eq!(empty.sub_scores.keyword_match, 0);
        assert!(!empty.recommendations.is_empty());
    }

    #[test]
    fn test_score_is_deterministic() {
        assert_eq!(score(RESUME, JD), score(RESUME, JD));
    }

    #[test]
    fn test_empty_catalog_yields_empty_skill_sets() {
        let catalog = KeywordCatalog::empty();
        let report = HeuristicScorer::new(&catalog).composite_report(RESUME, JD);
        assert!(report.matched_skills.is_empty());
        assert!(report.missing_skills.is_empty());
        assert!(report.suggested_skills.is_empty());
        assert_eq!(report.sub_scores.keyword_match, 0);
    }
}
